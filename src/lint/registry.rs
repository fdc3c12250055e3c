//! Lint registry.
//!
//! The [`Registry`] owns every known [`Lint`], keyed by its unique name.
//! Registration is the only mutation; iteration is always in name order so
//! reports and listings are deterministic.
//!
//! The process-wide registry returned by [`global`] is built once by an
//! explicit pass over the built-in rules and is read-only afterwards.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::OnceCell;

use super::descriptor::Lint;
use super::rules::builtin_lints;
use super::source::Source;
use crate::error::{CertlintError, Result};

/// Catalog of lints, sorted by name.
#[derive(Debug, Default)]
pub struct Registry {
    lints: BTreeMap<String, Lint>,
}

static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// The process-wide registry of built-in lints.
///
/// Built on first use. A duplicate lint name among the built-ins is a
/// programming error and is returned on every call until fixed in code.
pub fn global() -> Result<&'static Registry> {
    GLOBAL.get_or_try_init(Registry::with_builtins)
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in lint.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for lint in builtin_lints() {
            registry.register(lint)?;
        }
        tracing::info!(lints = registry.len(), "registry built");
        Ok(registry)
    }

    /// Register a lint. Fails if the name is already taken.
    pub fn register(&mut self, lint: Lint) -> Result<()> {
        match self.lints.entry(lint.name().to_string()) {
            Entry::Occupied(entry) => Err(CertlintError::DuplicateLint {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(lint);
                Ok(())
            }
        }
    }

    /// Get a lint by name.
    pub fn get(&self, name: &str) -> Option<&Lint> {
        self.lints.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lints.contains_key(name)
    }

    /// Iterate over all lints in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Lint> {
        self.lints.values()
    }

    /// Lints drawn from the given policy family, in name order.
    pub fn by_source(&self, source: Source) -> impl Iterator<Item = &Lint> {
        self.lints.values().filter(move |l| l.source() == source)
    }

    /// All lint names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lints.keys().map(String::as_str)
    }

    /// Distinct sources with at least one lint.
    pub fn sources(&self) -> BTreeSet<Source> {
        self.lints.values().map(Lint::source).collect()
    }

    /// Eagerly run every lint's one-time setup.
    ///
    /// Returns the names of lints whose initialization failed. Failed lints
    /// stay registered and report `Fatal` when evaluated.
    pub fn initialize_all(&self) -> Vec<&str> {
        self.lints
            .values()
            .filter(|l| l.initialize().is_err())
            .map(Lint::name)
            .collect()
    }

    /// Get the number of registered lints.
    pub fn len(&self) -> usize {
        self.lints.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Certificate;
    use crate::lint::{LintCheck, LintResult};

    struct MockCheck;

    impl LintCheck for MockCheck {
        fn check_applies(&self, _cert: &Certificate) -> bool {
            true
        }

        fn execute(&self, _cert: &Certificate) -> LintResult {
            LintResult::pass()
        }
    }

    struct BrokenInit;

    impl LintCheck for BrokenInit {
        fn initialize(&self) -> anyhow::Result<()> {
            anyhow::bail!("broken")
        }

        fn check_applies(&self, _cert: &Certificate) -> bool {
            true
        }

        fn execute(&self, _cert: &Certificate) -> LintResult {
            LintResult::pass()
        }
    }

    fn mock(name: &str, source: Source) -> Lint {
        Lint::new(name, MockCheck).with_source(source)
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = Registry::new();
        registry.register(mock("e_mock", Source::Rfc5280)).unwrap();

        assert!(!registry.is_empty());
        assert!(registry.get("e_mock").is_some());
        assert!(registry.contains("e_mock"));
        assert!(registry.get("e_unknown").is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = Registry::new();
        registry.register(mock("e_mock", Source::Rfc5280)).unwrap();

        let err = registry
            .register(mock("e_mock", Source::CabfEvGuidelines))
            .unwrap_err();
        assert!(matches!(err, CertlintError::DuplicateLint { ref name } if name == "e_mock"));
        // The original registration is kept.
        assert_eq!(registry.get("e_mock").unwrap().source(), Source::Rfc5280);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut registry = Registry::new();
        registry.register(mock("w_zeta", Source::Rfc5280)).unwrap();
        registry.register(mock("e_alpha", Source::Rfc5280)).unwrap();
        registry.register(mock("n_mid", Source::Rfc5280)).unwrap();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["e_alpha", "n_mid", "w_zeta"]);
        assert_eq!(registry.iter().count(), 3);
    }

    #[test]
    fn filter_by_source() {
        let mut registry = Registry::new();
        registry.register(mock("e_a", Source::Rfc5280)).unwrap();
        registry.register(mock("e_b", Source::CabfEvGuidelines)).unwrap();
        registry.register(mock("e_c", Source::CabfEvGuidelines)).unwrap();

        let ev: Vec<_> = registry
            .by_source(Source::CabfEvGuidelines)
            .map(Lint::name)
            .collect();
        assert_eq!(ev, vec!["e_b", "e_c"]);
        assert_eq!(registry.by_source(Source::AppleRootStorePolicy).count(), 0);
        assert_eq!(
            registry.sources().into_iter().collect::<Vec<_>>(),
            vec![Source::Rfc5280, Source::CabfEvGuidelines]
        );
    }

    #[test]
    fn initialize_all_reports_failures() {
        let mut registry = Registry::new();
        registry.register(mock("e_ok", Source::Rfc5280)).unwrap();
        registry.register(Lint::new("e_broken", BrokenInit)).unwrap();

        assert_eq!(registry.initialize_all(), vec!["e_broken"]);
        assert!(registry.get("e_ok").unwrap().is_initialized());
    }

    #[test]
    fn registry_with_builtins_has_rules() {
        let registry = Registry::with_builtins().unwrap();
        assert!(registry.len() >= 8);
        assert!(registry.get("e_ev_orgid_encoding").is_some());
        assert!(registry.get("e_ev_orgid_well_formed").is_some());
        assert!(registry.get("e_ev_orgidext_present_mandatory").is_some());
        assert!(registry.get("e_ev_ntr_subject_jurisdiction_serial").is_some());
        assert!(registry.get("e_validity_time_not_positive").is_some());
        assert!(registry.initialize_all().is_empty());
    }

    #[test]
    fn global_registry_is_shared() {
        let a = global().unwrap();
        let b = global().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), Registry::with_builtins().unwrap().len());
    }
}

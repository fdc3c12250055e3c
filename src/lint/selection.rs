//! Choosing which lints to run.
//!
//! A [`Selection`] turns include/exclude criteria into the concrete,
//! registry-ordered list of descriptors handed to the evaluator. Steps are
//! applied in a fixed order: name validation, name filter, include, exclude.

use regex::Regex;

use super::descriptor::Lint;
use super::registry::Registry;
use super::source::Source;
use crate::error::{CertlintError, Result};

/// Criteria for choosing lints.
///
/// The default selection chooses every registered lint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Run only these lints (together with `include_sources`).
    pub include_names: Vec<String>,
    /// Never run these lints.
    pub exclude_names: Vec<String>,
    /// Run only lints from these sources (together with `include_names`).
    pub include_sources: Vec<Source>,
    /// Never run lints from these sources.
    pub exclude_sources: Vec<Source>,
    /// Keep only lints whose name matches this regular expression.
    pub name_filter: Option<String>,
}

/// Split a comma-separated name list, trimming blanks.
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Selection {
    /// Select every registered lint.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn include_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn include_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.include_sources.extend(sources);
        self
    }

    pub fn exclude_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.exclude_sources.extend(sources);
        self
    }

    pub fn name_filter(mut self, pattern: impl Into<String>) -> Self {
        self.name_filter = Some(pattern.into());
        self
    }

    /// Whether no criteria are set.
    pub fn is_all(&self) -> bool {
        *self == Self::all()
    }

    /// Resolve against a registry.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLint` if an included or excluded name is not
    /// registered, and `InvalidNameFilter` if the name filter does not
    /// compile.
    pub fn resolve<'r>(&self, registry: &'r Registry) -> Result<Vec<&'r Lint>> {
        if let Some(unknown) = self
            .include_names
            .iter()
            .chain(&self.exclude_names)
            .find(|name| !registry.contains(name))
        {
            return Err(CertlintError::UnknownLint {
                name: unknown.clone(),
            });
        }

        let filter = self
            .name_filter
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| CertlintError::InvalidNameFilter {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        let has_includes = !self.include_names.is_empty() || !self.include_sources.is_empty();

        let selected = registry
            .iter()
            .filter(|lint| filter.as_ref().map_or(true, |re| re.is_match(lint.name())))
            .filter(|lint| {
                !has_includes
                    || self.include_names.iter().any(|n| n == lint.name())
                    || self.include_sources.contains(&lint.source())
            })
            .filter(|lint| {
                !self.exclude_names.iter().any(|n| n == lint.name())
                    && !self.exclude_sources.contains(&lint.source())
            })
            .collect();

        Ok(selected)
    }
}

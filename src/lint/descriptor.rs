//! Lint descriptors.
//!
//! A [`Lint`] binds a unique name and policy metadata to a boxed
//! [`LintCheck`]. Descriptors are immutable once built, apart from the
//! memoized outcome of the check's one-time initialization.

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::certificate::Certificate;

use super::guard::guarded;
use super::rule::LintCheck;
use super::source::Source;

/// A registered lint: identity, metadata and check.
pub struct Lint {
    name: String,
    description: String,
    citation: String,
    source: Source,
    effective_date: Option<DateTime<Utc>>,
    check: Box<dyn LintCheck>,
    init: OnceCell<Result<(), String>>,
}

/// Serializable lint metadata, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
    pub citation: String,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,
}

impl Lint {
    /// Create a lint with no metadata and no effective date.
    pub fn new(name: impl Into<String>, check: impl LintCheck + 'static) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            citation: String::new(),
            source: Source::Unknown,
            effective_date: None,
            check: Box::new(check),
            init: OnceCell::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = citation.into();
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Certificates issued before `date` receive `NE`.
    pub fn with_effective_date(mut self, date: DateTime<Utc>) -> Self {
        self.effective_date = Some(date);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.effective_date
    }

    pub fn check(&self) -> &dyn LintCheck {
        self.check.as_ref()
    }

    /// Whether the lint was in force when `cert` was issued.
    pub fn is_effective(&self, cert: &Certificate) -> bool {
        match self.effective_date {
            Some(date) => cert.not_before >= date,
            None => true,
        }
    }

    /// Run the check's one-time setup, or return the remembered outcome.
    ///
    /// Concurrent first callers block until a single initialization finishes.
    /// A failure, including a panic, is remembered permanently.
    pub fn initialize(&self) -> Result<(), &str> {
        self.init
            .get_or_init(|| {
                let outcome = match guarded(|| self.check.initialize()) {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(format!("{:#}", e)),
                    Err(panic) => Err(format!("panicked: {}", panic)),
                };
                match &outcome {
                    Ok(()) => tracing::debug!(lint = %self.name, "initialized"),
                    Err(e) => tracing::warn!(lint = %self.name, error = %e, "lint failed to initialize"),
                }
                outcome
            })
            .as_ref()
            .map(|_| ())
            .map_err(String::as_str)
    }

    /// Whether initialization has already run.
    pub fn is_initialized(&self) -> bool {
        self.init.get().is_some()
    }

    pub fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            citation: self.citation.clone(),
            source: self.source,
            effective_date: self.effective_date,
        }
    }
}

impl std::fmt::Debug for Lint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lint")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("effective_date", &self.effective_date)
            .finish_non_exhaustive()
    }
}

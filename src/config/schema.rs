//! Configuration schema for `.certlint.yml`.
//!
//! Every field is optional; an empty file selects every lint and runs them
//! sequentially with human-readable output.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lint::{EvaluateOptions, OutputFormat, Selection, Source};

/// Root configuration structure for `.certlint.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertlintConfig {
    /// Run only these lints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_names: Vec<String>,

    /// Never run these lints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_names: Vec<String>,

    /// Run only lints from these sources, e.g. `CABF_EV`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_sources: Vec<String>,

    /// Never run lints from these sources
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_sources: Vec<String>,

    /// Regular expression lint names must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_filter: Option<String>,

    /// Run lints on a thread pool
    #[serde(skip_serializing_if = "is_false")]
    pub parallel: bool,

    /// Stop starting new lints after this many milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Report format
    pub format: OutputFormat,

    /// Pretty-print JSON reports
    #[serde(skip_serializing_if = "is_false")]
    pub pretty: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl CertlintConfig {
    /// Build the lint selection described by this config.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSource` if a source tag is not recognised. Lint names
    /// are checked later, when the selection is resolved against a registry.
    pub fn selection(&self) -> Result<Selection> {
        let mut selection = Selection::all()
            .include_names(self.include_names.iter().cloned())
            .exclude_names(self.exclude_names.iter().cloned())
            .include_sources(parse_sources(&self.include_sources)?)
            .exclude_sources(parse_sources(&self.exclude_sources)?);
        if let Some(filter) = &self.name_filter {
            selection = selection.name_filter(filter.clone());
        }
        Ok(selection)
    }

    /// Scheduling options described by this config.
    pub fn evaluate_options(&self) -> EvaluateOptions {
        EvaluateOptions {
            parallel: self.parallel,
            timeout: self.timeout_ms.map(Duration::from_millis),
            cancel: None,
        }
    }
}

fn parse_sources(tags: &[String]) -> Result<Vec<Source>> {
    tags.iter().map(|tag| tag.trim().parse()).collect()
}

//! Lint verdicts.
//!
//! - [`Status`] - The closed set of outcomes a lint can produce
//! - [`LintResult`] - A status plus human-readable details

use serde::{Deserialize, Serialize};

/// Outcome of running one lint against one certificate.
///
/// Variants are declared in ascending severity, so the derived ordering is
/// the aggregation order: `Fatal > Error > Warn > Pass > NE > NA > Reserved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Status {
    /// Unset or unknown.
    #[default]
    #[serde(rename = "reserved")]
    Reserved,
    /// The lint does not apply to this certificate.
    #[serde(rename = "NA")]
    NA,
    /// The lint was not yet in force when the certificate was issued.
    #[serde(rename = "NE")]
    NE,
    #[serde(rename = "pass")]
    Pass,
    /// Advisory finding.
    #[serde(rename = "warn")]
    Warn,
    /// The certificate violates the rule.
    #[serde(rename = "error")]
    Error,
    /// The lint itself could not complete.
    #[serde(rename = "fatal")]
    Fatal,
}

impl Status {
    /// All statuses in ascending severity.
    pub const ALL: [Status; 7] = [
        Status::Reserved,
        Status::NA,
        Status::NE,
        Status::Pass,
        Status::Warn,
        Status::Error,
        Status::Fatal,
    ];

    /// Error or Fatal.
    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Error | Status::Fatal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Reserved => "reserved",
            Status::NA => "NA",
            Status::NE => "NE",
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Error => "error",
            Status::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lint verdict with an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LintResult {
    #[serde(rename = "result")]
    pub status: Status,
    /// Explanation; empty for Pass and NA.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,
}

impl LintResult {
    /// Create a result with details.
    pub fn new(status: Status, details: impl Into<String>) -> Self {
        Self {
            status,
            details: details.into(),
        }
    }

    pub fn pass() -> Self {
        Self::new(Status::Pass, "")
    }

    pub fn na() -> Self {
        Self::new(Status::NA, "")
    }

    pub fn ne() -> Self {
        Self::new(Status::NE, "")
    }

    pub fn warn(details: impl Into<String>) -> Self {
        Self::new(Status::Warn, details)
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self::new(Status::Error, details)
    }

    pub fn fatal(details: impl Into<String>) -> Self {
        Self::new(Status::Fatal, details)
    }
}

//! Per-certificate lint reports.
//!
//! A [`Report`] maps every selected lint name to its [`LintResult`]. NA and NE
//! entries are kept: a lint that is absent from the report was not selected,
//! while an NA entry means it was selected and did not apply.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::status::{LintResult, Status};

/// Results of one evaluation, keyed and ordered by lint name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    results: BTreeMap<String, LintResult>,
}

/// Number of results per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub na: usize,
    pub ne: usize,
    pub warn: usize,
    pub error: usize,
    pub fatal: usize,
    pub reserved: usize,
}

impl Report {
    pub(crate) fn from_results(results: impl IntoIterator<Item = (String, LintResult)>) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }

    /// Result for a lint, if it was selected.
    pub fn get(&self, name: &str) -> Option<&LintResult> {
        self.results.get(name)
    }

    /// Status for a lint, if it was selected.
    pub fn status(&self, name: &str) -> Option<Status> {
        self.get(name).map(|r| r.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LintResult)> {
        self.results.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of results with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.results.values().filter(|r| r.status == status).count()
    }

    /// The most severe status in the report.
    pub fn max_status(&self) -> Option<Status> {
        self.results.values().map(|r| r.status).max()
    }

    pub fn warnings_present(&self) -> bool {
        self.count(Status::Warn) > 0
    }

    pub fn errors_present(&self) -> bool {
        self.count(Status::Error) > 0
    }

    pub fn fatals_present(&self) -> bool {
        self.count(Status::Fatal) > 0
    }

    /// No Error or Fatal results.
    pub fn passed(&self) -> bool {
        !self.results.values().any(|r| r.status.is_failure())
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.results.len(),
            ..Default::default()
        };
        for result in self.results.values() {
            match result.status {
                Status::Pass => summary.pass += 1,
                Status::NA => summary.na += 1,
                Status::NE => summary.ne += 1,
                Status::Warn => summary.warn += 1,
                Status::Error => summary.error += 1,
                Status::Fatal => summary.fatal += 1,
                Status::Reserved => summary.reserved += 1,
            }
        }
        summary
    }
}

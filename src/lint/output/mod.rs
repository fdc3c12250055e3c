//! Report output formatters.
//!
//! This module provides formatters for writing lint reports in different
//! formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::Report;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting lint reports.
pub trait ReportFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::{CertificateHeader, JsonFormatter};

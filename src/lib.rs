//! certlint - X.509 certificate compliance linting.
//!
//! certlint evaluates a decoded certificate against a registry of
//! independent compliance rules (RFC 5280, CA/Browser Forum Baseline
//! Requirements and EV Guidelines) and returns a report with exactly one
//! result per selected rule.
//!
//! # Modules
//!
//! - [`certificate`] - Decoded certificate view and PEM/DER/base64 loading
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.certlint.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Lint registry, selection, evaluation and reports
//! - [`ui`] - Terminal output
//! - [`util`] - OIDs, dates and subject helpers shared by rules
//!
//! # Example
//!
//! ```
//! use certlint::certificate::Certificate;
//! use certlint::lint::{registry, Evaluator, Selection, Source, Status};
//!
//! let registry = registry::global().unwrap();
//! let selection = Selection::all().include_sources([Source::Rfc5280]);
//! let report = Evaluator::new(registry)
//!     .evaluate(&Certificate::default(), &selection)
//!     .unwrap();
//!
//! assert_eq!(report.status("e_validity_time_not_positive"), Some(Status::Pass));
//! ```

pub mod certificate;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod ui;
pub mod util;

pub use error::{CertlintError, Result};

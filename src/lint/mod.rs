//! Certificate lint engine.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Checks** - Individual compliance rules ([`LintCheck`] trait)
//! - **Descriptors** - A check plus its name, source and effective date ([`Lint`])
//! - **Registry** - Every known lint, in name order ([`Registry`])
//! - **Selection** - Which lints to run ([`Selection`])
//! - **Evaluator** - Runs selected lints and collects a [`Report`]
//!
//! # Example
//!
//! ```
//! use certlint::certificate::Certificate;
//! use certlint::lint::{registry, Evaluator, Selection, Status};
//!
//! let registry = registry::global().unwrap();
//! let report = Evaluator::new(registry)
//!     .evaluate(&Certificate::default(), &Selection::all())
//!     .unwrap();
//!
//! // Every selected lint gets exactly one result
//! assert_eq!(report.len(), registry.len());
//! assert!(Status::Pass < Status::Error);
//! ```

pub mod descriptor;
pub mod evaluator;
mod guard;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod selection;
pub mod source;
pub mod status;

pub use descriptor::{Lint, LintInfo};
pub use evaluator::{run_lint, CancelToken, EvaluateOptions, Evaluator, CANCELLED};
pub use guard::silence_rule_panics;
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::Registry;
pub use report::{Report, Summary};
pub use rule::LintCheck;
pub use selection::{parse_name_list, Selection};
pub use source::Source;
pub use status::{LintResult, Status};

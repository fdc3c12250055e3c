//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Exit codes
//!
//! - `0` - the command succeeded and no lint reported `error` or `fatal`
//! - `1` - at least one lint reported `error` or `fatal`
//! - `2` - bad configuration, selection or input

pub mod dispatcher;
pub mod lint;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_LINT_FAILURE, EXIT_USAGE};

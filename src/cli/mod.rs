//! Command-line interface for certlint.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, LintArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

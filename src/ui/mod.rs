//! User-facing output.
//!
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing reports to stdout and problems to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use certlint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("e_example: pass");
//! ui.error("Failed to parse certificate");
//!
//! assert!(ui.has_message("e_example"));
//! assert!(ui.has_error("parse"));
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::{should_use_colors, TerminalUI};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write command output, such as a report or a listing.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Whether output may contain ANSI colors.
    fn use_color(&self) -> bool;
}

//! Terminal output.

use std::io::Write;

use console::{style, Term};

use super::UserInterface;

/// Terminal UI writing messages to stdout and diagnostics to stderr.
#[derive(Debug, Clone)]
pub struct TerminalUI {
    out: Term,
    err: Term,
    use_color: bool,
}

impl TerminalUI {
    pub fn new(use_color: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.use_color {
            writeln!(self.err, "{} {}", style("warning:").yellow().bold(), msg).ok();
        } else {
            writeln!(self.err, "warning: {}", msg).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        if self.use_color {
            writeln!(self.err, "{} {}", style("error:").red().bold(), msg).ok();
        } else {
            writeln!(self.err, "error: {}", msg).ok();
        }
    }

    fn use_color(&self) -> bool {
        self.use_color
    }
}

/// Decide whether to color output.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!should_use_colors(true));
    }

    #[test]
    fn terminal_ui_reports_color_choice() {
        assert!(TerminalUI::new(true).use_color());
        assert!(!TerminalUI::new(false).use_color());
    }
}

//! Human-readable output formatter.
//!
//! Formats lint reports for terminal display with optional color support.

use super::ReportFormatter;
use crate::lint::{Report, Status};
use console::style;
use std::io::Write;

/// Formats lint reports for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Also list pass, NA and NE results.
    pub verbose: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn status_label(&self, status: Status) -> String {
        let label = status.to_string();
        if !self.use_color {
            return label;
        }
        match status {
            Status::Fatal => style(label).magenta().bold().to_string(),
            Status::Error => style(label).red().bold().to_string(),
            Status::Warn => style(label).yellow().to_string(),
            Status::Pass => style(label).green().to_string(),
            _ => style(label).dim().to_string(),
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        for (name, result) in report.iter() {
            let notable = result.status > Status::Pass;
            if !notable && !self.verbose {
                continue;
            }

            // Header line: error[lint-name]: details
            if result.details.is_empty() {
                writeln!(writer, "{}[{}]", self.status_label(result.status), name)?;
            } else {
                writeln!(
                    writer,
                    "{}[{}]: {}",
                    self.status_label(result.status),
                    name,
                    result.details
                )?;
            }
        }

        let summary = report.summary();
        writeln!(
            writer,
            "Checked {} lint(s): {} fatal, {} error(s), {} warning(s), {} passed, {} not applicable, {} not effective",
            summary.total,
            summary.fatal,
            summary.error,
            summary.warn,
            summary.pass,
            summary.na,
            summary.ne
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintResult;

    fn render(formatter: HumanFormatter, report: &Report) -> String {
        let mut output = Vec::new();
        formatter.format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn report() -> Report {
        Report::from_results([
            ("e_bad".to_string(), LintResult::error("Test error message")),
            ("w_meh".to_string(), LintResult::warn("Test warning")),
            ("e_ok".to_string(), LintResult::pass()),
            ("e_skip".to_string(), LintResult::na()),
        ])
    }

    #[test]
    fn formats_error_and_warning() {
        let output = render(HumanFormatter::new(false), &report());

        assert!(output.contains("error[e_bad]: Test error message"));
        assert!(output.contains("warn[w_meh]: Test warning"));
    }

    #[test]
    fn hides_quiet_results_unless_verbose() {
        let output = render(HumanFormatter::new(false), &report());
        assert!(!output.contains("e_ok"));
        assert!(!output.contains("e_skip"));

        let output = render(HumanFormatter::new(false).verbose(true), &report());
        assert!(output.contains("pass[e_ok]"));
        assert!(output.contains("NA[e_skip]"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(HumanFormatter::new(false), &report());
        assert!(output.contains("Checked 4 lint(s)"));
        assert!(output.contains("1 error(s)"));
        assert!(output.contains("1 warning(s)"));
    }

    #[test]
    fn fatal_is_shown() {
        let report = Report::from_results([("e_boom".to_string(), LintResult::fatal("Cancelled"))]);
        let output = render(HumanFormatter::new(false), &report);
        assert!(output.contains("fatal[e_boom]: Cancelled"));
        assert!(output.contains("1 fatal"));
    }
}

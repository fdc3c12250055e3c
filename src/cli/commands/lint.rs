//! Lint command implementation.
//!
//! The `certlint lint` command decodes one certificate, runs the selected
//! lints and prints the report.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::certificate::Certificate;
use crate::cli::args::LintArgs;
use crate::config::{load_config, CertlintConfig};
use crate::error::{CertlintError, Result};
use crate::lint::{
    parse_name_list, registry, Evaluator, HumanFormatter, JsonFormatter, OutputFormat, Report,
    ReportFormatter,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_LINT_FAILURE, EXIT_USAGE};

/// The lint command implementation.
pub struct LintCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: LintArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Load config and apply command-line overrides.
    ///
    /// List-valued flags replace the config lists when given.
    fn effective_config(&self) -> Result<CertlintConfig> {
        let mut config = load_config(&self.working_dir, self.config_path.as_deref())?;
        let args = &self.args;

        if let Some(names) = &args.include_names {
            config.include_names = parse_name_list(names);
        }
        if let Some(names) = &args.exclude_names {
            config.exclude_names = parse_name_list(names);
        }
        if let Some(sources) = &args.include_sources {
            config.include_sources = parse_name_list(sources);
        }
        if let Some(sources) = &args.exclude_sources {
            config.exclude_sources = parse_name_list(sources);
        }
        if let Some(filter) = &args.name_filter {
            config.name_filter = Some(filter.clone());
        }
        if let Some(format) = args.format {
            config.format = format;
        }
        if let Some(timeout) = args.timeout_ms {
            config.timeout_ms = Some(timeout);
        }
        config.parallel |= args.parallel;
        config.pretty |= args.pretty;

        Ok(config)
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        if self.args.file.as_os_str() == "-" {
            std::io::stdin().read_to_end(&mut data)?;
        } else {
            data = std::fs::read(&self.args.file)?;
        }
        Ok(data)
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.effective_config()?;
        let selection = config.selection()?;

        let data = match self.read_input() {
            Ok(data) => data,
            Err(e) => {
                ui.error(&format!("Failed to read {}: {}", self.args.file.display(), e));
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
        };
        let cert = Certificate::load(&data, self.args.input_format)?;
        tracing::debug!(subject = %cert.subject, "certificate loaded");

        let registry = registry::global()?;
        let report = Evaluator::new(registry)
            .with_options(config.evaluate_options())
            .evaluate(&cert, &selection)?;

        let output = match config.format {
            OutputFormat::Json => render(
                &JsonFormatter::new(config.pretty).with_certificate(&cert),
                &report,
            )?,
            OutputFormat::Human => render(
                &HumanFormatter::new(ui.use_color()).verbose(self.args.verbose),
                &report,
            )?,
        };
        ui.message(output.trim_end_matches('\n'));

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_LINT_FAILURE))
        }
    }
}

fn render<F: ReportFormatter>(formatter: &F, report: &Report) -> Result<String> {
    let mut output = Vec::new();
    formatter.format(report, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.run(ui) {
            Ok(result) => Ok(result),
            Err(
                e @ (CertlintError::CertificateParse { .. }
                | CertlintError::ConfigNotFound { .. }
                | CertlintError::ConfigParseError { .. }
                | CertlintError::UnknownLint { .. }
                | CertlintError::UnknownSource { .. }
                | CertlintError::InvalidNameFilter { .. }
                | CertlintError::Io(_)),
            ) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_USAGE))
            }
            Err(e) => Err(e),
        }
    }
}

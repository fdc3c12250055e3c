//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::certificate::InputFormat;
use crate::lint::OutputFormat;

/// certlint - X.509 certificate compliance linter.
#[derive(Debug, Parser)]
#[command(name = "certlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.certlint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint a certificate
    Lint(LintArgs),

    /// List available lints
    List(ListArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Args)]
pub struct LintArgs {
    /// Certificate file, or `-` for stdin
    pub file: PathBuf,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Encoding of the input certificate
    #[arg(long, value_enum, default_value = "pem")]
    pub input_format: InputFormat,

    /// Comma-separated lint names to run
    #[arg(long)]
    pub include_names: Option<String>,

    /// Comma-separated lint names to skip
    #[arg(long)]
    pub exclude_names: Option<String>,

    /// Comma-separated sources to run, e.g. CABF_EV,RFC5280
    #[arg(long)]
    pub include_sources: Option<String>,

    /// Comma-separated sources to skip
    #[arg(long)]
    pub exclude_sources: Option<String>,

    /// Only run lints whose name matches this regular expression
    #[arg(long)]
    pub name_filter: Option<String>,

    /// Run lints in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Stop starting new lints after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show passing, not applicable and not effective results too
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Print one JSON object per lint
    #[arg(long)]
    pub json: bool,

    /// List lint sources instead of lints
    #[arg(long)]
    pub sources: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lint_flags() {
        let cli = Cli::try_parse_from([
            "certlint",
            "--no-color",
            "lint",
            "cert.der",
            "--input-format",
            "der",
            "--format",
            "json",
            "--include-sources",
            "CABF_EV",
            "--timeout-ms",
            "50",
        ])
        .unwrap();

        assert!(cli.no_color);
        let Commands::Lint(args) = cli.command else {
            panic!("expected lint command");
        };
        assert_eq!(args.file, PathBuf::from("cert.der"));
        assert_eq!(args.input_format, InputFormat::Der);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.include_sources.as_deref(), Some("CABF_EV"));
        assert_eq!(args.timeout_ms, Some(50));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["certlint", "list", "--sources", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::List(ListArgs { sources: true, .. })));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["certlint"]).is_err());
    }
}

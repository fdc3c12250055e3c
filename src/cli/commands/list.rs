//! List command implementation.
//!
//! The `certlint list` command shows the registered lints or their sources.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::lint::registry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = registry::global()?;

        if self.args.sources {
            for source in registry.sources() {
                if self.args.json {
                    ui.message(&serde_json::to_string(&source).map_err(anyhow::Error::from)?);
                } else {
                    ui.message(source.as_str());
                }
            }
            return Ok(CommandResult::success());
        }

        let width = registry.names().map(str::len).max().unwrap_or(0);
        for lint in registry.iter() {
            if self.args.json {
                let line = serde_json::to_string(&lint.info()).map_err(anyhow::Error::from)?;
                ui.message(&line);
            } else {
                ui.message(&format!(
                    "{:<width$}  {:<8}  {}",
                    lint.name(),
                    lint.source().as_str(),
                    lint.description(),
                    width = width
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

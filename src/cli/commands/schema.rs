//! Schema command implementation.
//!
//! The `carnet schema` command prints the JSON schema of the saved record,
//! or of `config.yml` with `--settings`.

use schemars::schema_for;

use crate::cli::args::SchemaArgs;
use crate::config::ConfigFile;
use crate::document::LogbookDocument;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

/// Pretty JSON schema of the logbook record.
pub fn document_schema() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(LogbookDocument))?)
}

/// Pretty JSON schema of `config.yml`.
pub fn config_schema() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(ConfigFile))?)
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = if self.args.settings {
            config_schema()?
        } else {
            document_schema()?
        };
        ui.message(&schema);
        Ok(CommandResult::success())
    }
}

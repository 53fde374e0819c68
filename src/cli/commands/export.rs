//! Export command implementation.
//!
//! The `carnet export` command writes `Carnet_EPS_<nom>_<prenom>.json`.

use crate::cli::args::ExportArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_editor, Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand {
    settings: Settings,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(settings: &Settings, args: ExportArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = self
            .args
            .out
            .as_deref()
            .unwrap_or(&self.settings.export_dir);

        let editor = open_editor(&self.settings);
        let path = editor.download(dir)?;

        ui.success(&format!("Carnet exporté : {}", path.display()));
        Ok(CommandResult::success())
    }
}

//! Show command implementation.
//!
//! The `carnet show` command prints the logbook, section by section.

use crate::cli::args::ShowArgs;
use crate::config::Settings;
use crate::editor::show_document;
use crate::error::Result;
use crate::ui::{should_use_colors, CarnetTheme, UserInterface};

use super::dispatcher::{open_editor, Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    settings: Settings,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(settings: &Settings, args: ShowArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut editor = open_editor(&self.settings);

        if self.args.json {
            let json = serde_json::to_string_pretty(editor.document())?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if self.args.all {
            editor.visibility_mut().expand_all();
        }
        for section in &self.args.toggle {
            editor.toggle_section(*section);
        }

        let theme = if should_use_colors() {
            CarnetTheme::new()
        } else {
            CarnetTheme::plain()
        };

        ui.show_header("Carnet EPS");
        show_document(ui, editor.document(), editor.visibility(), &theme);
        ui.show_hint("Modifier : carnet set <champ> <valeur>, ou carnet edit");

        Ok(CommandResult::success())
    }
}

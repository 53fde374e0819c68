//! Reset command implementation.
//!
//! The `carnet reset` command erases the logbook after confirmation.

use crate::cli::args::ResetArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_editor, Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    settings: Settings,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(settings: &Settings, args: ResetArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut editor = open_editor(&self.settings);

        if !editor.reset(ui, self.args.force)? {
            ui.message("Annulé");
            if !ui.is_interactive() {
                ui.show_hint("Utilisez --force pour réinitialiser sans confirmation");
            }
            return Ok(CommandResult::success());
        }

        ui.success("Carnet réinitialisé");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldPath;
    use crate::editor::RESET_PROMPT_KEY;
    use crate::persistence::{FileStorage, SaveTiming};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn filled_settings(temp: &TempDir) -> Settings {
        let settings = Settings {
            data_dir: temp.path().to_path_buf(),
            export_dir: temp.path().to_path_buf(),
            timing: SaveTiming::default(),
        };
        let mut editor = open_editor(&settings);
        editor.input(FieldPath::LastName, "Lefèvre");
        editor.add_session();
        editor.flush().unwrap();
        settings
    }

    fn record_exists(temp: &TempDir) -> bool {
        FileStorage::in_dir(temp.path()).path().exists()
    }

    #[test]
    fn force_resets_without_prompt() {
        let temp = TempDir::new().unwrap();
        let settings = filled_settings(&temp);
        let mut ui = MockUI::new();

        ResetCommand::new(&settings, ResetArgs { force: true })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert!(ui.has_success("réinitialisé"));
        assert!(!record_exists(&temp));
        assert!(open_editor(&settings).document().is_blank());
    }

    #[test]
    fn confirmed_prompt_resets() {
        let temp = TempDir::new().unwrap();
        let settings = filled_settings(&temp);
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response(RESET_PROMPT_KEY, "oui");

        ResetCommand::new(&settings, ResetArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!record_exists(&temp));
    }

    #[test]
    fn unanswered_prompt_cancels() {
        let temp = TempDir::new().unwrap();
        let settings = filled_settings(&temp);
        let mut ui = MockUI::new();

        let result = ResetCommand::new(&settings, ResetArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Annulé"));
        assert!(!ui.hints().is_empty());
        assert_eq!(open_editor(&settings).document().last_name, "Lefèvre");
    }
}

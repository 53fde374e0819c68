//! Session command implementation.
//!
//! The `carnet session` command adds, lists, updates and removes activity
//! sessions.

use crate::cli::args::{SessionAction, SessionArgs};
use crate::config::Settings;
use crate::editor::session_summary;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_editor, Command, CommandResult};

/// The session command implementation.
pub struct SessionCommand {
    settings: Settings,
    args: SessionArgs,
}

impl SessionCommand {
    /// Create a new session command.
    pub fn new(settings: &Settings, args: SessionArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for SessionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut editor = open_editor(&self.settings);

        match &self.args.action {
            SessionAction::Add => {
                let id = editor.add_session();
                editor.flush()?;
                ui.success(&format!("Séance ajoutée (id {})", id));
            }
            SessionAction::List => {
                let sessions = &editor.document().activity_sessions;
                if sessions.is_empty() {
                    ui.message("Aucune séance");
                    ui.show_hint("Ajouter : carnet session add");
                }
                for session in sessions {
                    ui.message(&session_summary(session));
                }
            }
            SessionAction::Update { id, field, value } => {
                if !editor.input_session(*id, *field, value.clone()) {
                    ui.error(&format!("Aucune séance avec l'id {}", id));
                    return Ok(CommandResult::failure(1));
                }
                editor.flush()?;
                ui.success(&format!("{} mis à jour", field.label()));
            }
            SessionAction::Remove { id } => {
                if !editor.remove_session(*id) {
                    ui.error(&format!("Aucune séance avec l'id {}", id));
                    return Ok(CommandResult::failure(1));
                }
                editor.flush()?;
                ui.success(&format!("Séance {} supprimée", id));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{SessionField, SessionId};
    use crate::persistence::SaveTiming;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            data_dir: temp.path().to_path_buf(),
            export_dir: temp.path().to_path_buf(),
            timing: SaveTiming::default(),
        }
    }

    fn run(settings: &Settings, action: SessionAction, ui: &mut MockUI) -> CommandResult {
        SessionCommand::new(settings, SessionArgs { action })
            .execute(ui)
            .unwrap()
    }

    fn only_session_id(settings: &Settings) -> SessionId {
        let editor = open_editor(settings);
        assert_eq!(editor.document().activity_sessions.len(), 1);
        editor.document().activity_sessions[0].id
    }

    #[test]
    fn add_update_list_remove() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        assert!(run(&settings, SessionAction::Add, &mut ui).success);
        let id = only_session_id(&settings);
        assert!(ui.has_success(&id.to_string()));

        let update = SessionAction::Update {
            id,
            field: SessionField::ActivityName,
            value: "Badminton".to_string(),
        };
        assert!(run(&settings, update, &mut ui).success);

        run(&settings, SessionAction::List, &mut ui);
        assert!(ui.has_message("Badminton"));

        assert!(run(&settings, SessionAction::Remove { id }, &mut ui).success);
        assert!(open_editor(&settings).document().activity_sessions.is_empty());
    }

    #[test]
    fn empty_list_says_so() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        run(&settings(&temp), SessionAction::List, &mut ui);
        assert!(ui.has_message("Aucune séance"));
    }

    #[test]
    fn unknown_id_fails() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        let result = run(
            &settings,
            SessionAction::Remove {
                id: SessionId::from_raw(12),
            },
            &mut ui,
        );
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("12"));

        let update = SessionAction::Update {
            id: SessionId::from_raw(12),
            field: SessionField::Date,
            value: "2024-01-01".to_string(),
        };
        assert!(!run(&settings, update, &mut ui).success);
    }
}

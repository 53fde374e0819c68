//! Edit command implementation.
//!
//! The `carnet edit` command runs a menu loop over the editor actions.
//! Edits are saved in the background after each quiet period and flushed
//! on exit.

use std::path::PathBuf;

use crate::config::Settings;
use crate::document::{FieldPath, SessionField, SessionId};
use crate::editor::{render_session, session_summary, show_document, Editor, Section};
use crate::error::Result;
use crate::ui::{should_use_colors, CarnetTheme, Prompt, PromptOption, UserInterface};

use super::dispatcher::{open_editor, Command, CommandResult};

/// Value of the menu entry that goes back without choosing.
const BACK: &str = "back";

/// Top-level menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Show,
    EditField,
    ToggleSection,
    AddSession,
    EditSession,
    RemoveSession,
    Export,
    Reset,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 9] = [
        MenuAction::Show,
        MenuAction::EditField,
        MenuAction::ToggleSection,
        MenuAction::AddSession,
        MenuAction::EditSession,
        MenuAction::RemoveSession,
        MenuAction::Export,
        MenuAction::Reset,
        MenuAction::Quit,
    ];

    fn value(&self) -> &'static str {
        match self {
            MenuAction::Show => "show",
            MenuAction::EditField => "edit_field",
            MenuAction::ToggleSection => "toggle_section",
            MenuAction::AddSession => "add_session",
            MenuAction::EditSession => "edit_session",
            MenuAction::RemoveSession => "remove_session",
            MenuAction::Export => "export",
            MenuAction::Reset => "reset",
            MenuAction::Quit => "quit",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MenuAction::Show => "Afficher le carnet",
            MenuAction::EditField => "Modifier un champ",
            MenuAction::ToggleSection => "Déplier / replier une section",
            MenuAction::AddSession => "Ajouter une séance",
            MenuAction::EditSession => "Modifier une séance",
            MenuAction::RemoveSession => "Supprimer une séance",
            MenuAction::Export => "Télécharger (export JSON)",
            MenuAction::Reset => "Réinitialiser le carnet",
            MenuAction::Quit => "Quitter",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

/// The edit command implementation.
pub struct EditCommand {
    settings: Settings,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("carnet edit nécessite un terminal interactif");
            ui.show_hint("Dans un script, utilisez carnet set et carnet session");
            return Ok(CommandResult::failure(2));
        }

        let theme = if should_use_colors() {
            CarnetTheme::new()
        } else {
            CarnetTheme::plain()
        };
        let mut editor = open_editor(&self.settings);
        let mut session = EditSession {
            editor: &mut editor,
            theme: &theme,
            export_dir: self.settings.export_dir.clone(),
        };

        ui.show_header("Carnet EPS");
        session.run(ui)?;
        editor.flush()?;

        Ok(CommandResult::success())
    }
}

/// State of one interactive run.
struct EditSession<'a> {
    editor: &'a mut Editor,
    theme: &'a CarnetTheme,
    export_dir: PathBuf,
}

impl EditSession<'_> {
    fn run(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        show_document(ui, self.editor.document(), self.editor.visibility(), self.theme);

        loop {
            let options = MenuAction::ALL
                .iter()
                .map(|a| PromptOption::new(a.label(), a.value()))
                .collect();
            let answer = ui
                .prompt(&Prompt::select("action", "Que voulez-vous faire ?", options))?
                .as_string();
            let Some(action) = MenuAction::from_value(&answer) else {
                continue;
            };

            match action {
                MenuAction::Show => {
                    show_document(ui, self.editor.document(), self.editor.visibility(), self.theme)
                }
                MenuAction::EditField => self.edit_field(ui)?,
                MenuAction::ToggleSection => self.toggle_section(ui)?,
                MenuAction::AddSession => {
                    let id = self.editor.add_session();
                    ui.success(&format!("Séance ajoutée (id {})", id));
                    self.edit_session_fields(ui, id)?;
                }
                MenuAction::EditSession => {
                    if let Some(id) = self.pick_session(ui, "Quelle séance ?")? {
                        self.edit_session_fields(ui, id)?;
                    }
                }
                MenuAction::RemoveSession => self.remove_session(ui)?,
                MenuAction::Export => match self.editor.download(&self.export_dir) {
                    Ok(path) => ui.success(&format!("Carnet exporté : {}", path.display())),
                    Err(e) => ui.error(&format!("Échec de l'export : {}", e)),
                },
                MenuAction::Reset => {
                    if self.editor.reset(ui, false)? {
                        ui.success("Carnet réinitialisé");
                    } else {
                        ui.message("Annulé");
                    }
                }
                MenuAction::Quit => return Ok(()),
            }

            if let Some(saved) = self.editor.save_message() {
                ui.show_hint(saved);
            }
        }
    }

    fn pick_section(&self, ui: &mut dyn UserInterface) -> Result<Option<Section>> {
        let mut options: Vec<PromptOption> = Section::ALL
            .iter()
            .map(|s| {
                let expanded = self.editor.visibility().is_expanded(*s);
                PromptOption::new(self.theme.format_section(s.title(), expanded), s.as_str())
            })
            .collect();
        options.push(PromptOption::new("Retour", BACK));

        let answer = ui
            .prompt(&Prompt::select("section", "Quelle section ?", options))?
            .as_string();
        Ok(answer.parse().ok())
    }

    fn edit_field(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(section) = self.pick_section(ui)? else {
            return Ok(());
        };

        let mut options: Vec<PromptOption> = section
            .fields()
            .into_iter()
            .map(|f| PromptOption::new(f.label(), f.as_str()))
            .collect();
        options.push(PromptOption::new("Retour", BACK));

        let answer = ui
            .prompt(&Prompt::select("field", "Quel champ ?", options))?
            .as_string();
        let Ok(path) = answer.parse::<FieldPath>() else {
            return Ok(());
        };

        let current = path.get(self.editor.document()).to_string();
        let value = ui
            .prompt(&Prompt::input("field_value", path.label(), &current))?
            .as_string();
        if value != current {
            self.editor.input(path, value);
        }
        Ok(())
    }

    fn toggle_section(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        if let Some(section) = self.pick_section(ui)? {
            let expanded = self.editor.toggle_section(section);
            ui.message(&self.theme.format_section(section.title(), expanded));
        }
        Ok(())
    }

    fn pick_session(&self, ui: &mut dyn UserInterface, question: &str) -> Result<Option<SessionId>> {
        let sessions = &self.editor.document().activity_sessions;
        if sessions.is_empty() {
            ui.message("Aucune séance");
            return Ok(None);
        }

        let mut options: Vec<PromptOption> = sessions
            .iter()
            .map(|s| PromptOption::new(session_summary(s), s.id.to_string()))
            .collect();
        options.push(PromptOption::new("Retour", BACK));

        let answer = ui
            .prompt(&Prompt::select("session", question, options))?
            .as_string();
        Ok(answer.parse().ok())
    }

    fn edit_session_fields(&mut self, ui: &mut dyn UserInterface, id: SessionId) -> Result<()> {
        loop {
            let mut options: Vec<PromptOption> = SessionField::ALL
                .iter()
                .map(|f| PromptOption::new(f.label(), f.as_str()))
                .collect();
            options.push(PromptOption::new("Terminé", BACK));

            let answer = ui
                .prompt(&Prompt::select("session_field", "Quel champ de la séance ?", options))?
                .as_string();
            let Ok(field) = answer.parse::<SessionField>() else {
                break;
            };

            let Some(current) = self.editor.document().session(id).map(|s| s.get(field).to_string())
            else {
                break;
            };
            let value = ui
                .prompt(&Prompt::input("session_value", field.label(), &current))?
                .as_string();
            if value != current {
                self.editor.input_session(id, field, value);
            }
        }

        if let Some((position, session)) = self
            .editor
            .document()
            .activity_sessions
            .iter()
            .enumerate()
            .find(|(_, s)| s.id == id)
        {
            for line in render_session(session, position + 1, self.theme) {
                ui.message(&line);
            }
        }
        Ok(())
    }

    fn remove_session(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(id) = self.pick_session(ui, "Supprimer quelle séance ?")? else {
            return Ok(());
        };

        let confirmed = ui
            .prompt(&Prompt::confirm("remove_session", "Supprimer cette séance ?", false))?
            .as_bool()
            .unwrap_or(false);
        if confirmed && self.editor.remove_session(id) {
            ui.success(&format!("Séance {} supprimée", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::RESET_PROMPT_KEY;
    use crate::persistence::SaveTiming;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            data_dir: temp.path().join("data"),
            export_dir: temp.path().join("exports"),
            timing: SaveTiming::default(),
        }
    }

    fn interactive_ui() -> MockUI {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui
    }

    #[test]
    fn refuses_non_interactive() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = EditCommand::new(&settings(&temp)).execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn edits_a_field_and_saves_on_quit() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["edit_field", "quit"]);
        ui.set_prompt_response("section", "sante");
        ui.set_prompt_response("field", "sante.sommeil");
        ui.set_prompt_response("field_value", "Couché à 22h");

        let result = EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(open_editor(&settings).document().health.sleep, "Couché à 22h");
    }

    #[test]
    fn back_leaves_document_unchanged() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["edit_field", "quit"]);
        ui.set_prompt_response("section", BACK);

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(!ui.prompts_shown().contains(&"field".to_string()));
        assert!(open_editor(&settings).document().is_blank());
    }

    #[test]
    fn adds_and_fills_a_session() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["add_session", "quit"]);
        ui.queue_prompt_responses("session_field", vec!["apsa", "effortApres", BACK]);
        ui.queue_prompt_responses("session_value", vec!["Course d'orientation", "7"]);

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        let editor = open_editor(&settings);
        let sessions = &editor.document().activity_sessions;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].activity_name, "Course d'orientation");
        assert_eq!(sessions[0].perceived_effort_after, "7");
        assert!(ui.has_message("Séance 1"));
    }

    #[test]
    fn removes_a_session_after_confirmation() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let id = {
            let mut editor = open_editor(&settings);
            let id = editor.add_session();
            editor.flush().unwrap();
            id
        };
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["remove_session", "quit"]);
        ui.set_prompt_response("session", &id.to_string());
        ui.set_prompt_response("remove_session", "yes");

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(open_editor(&settings).document().activity_sessions.is_empty());
    }

    #[test]
    fn toggles_and_shows_sections() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["toggle_section", "show", "quit"]);
        ui.set_prompt_response("section", "bilans");

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(ui.has_message("▾ Bilans"));
        assert!(ui.has_message("Bilan final"));
    }

    #[test]
    fn exports_into_configured_dir() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["export", "quit"]);

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(temp
            .path()
            .join("exports")
            .join("Carnet_EPS_donnees_.json")
            .exists());
    }

    #[test]
    fn declined_reset_keeps_data() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["edit_field", "reset", "quit"]);
        ui.set_prompt_response("section", "intro");
        ui.set_prompt_response("field", "nom");
        ui.set_prompt_response("field_value", "Garcia");
        ui.set_prompt_response(RESET_PROMPT_KEY, "no");

        EditCommand::new(&settings).execute(&mut ui).unwrap();

        assert!(ui.has_message("Annulé"));
        assert_eq!(open_editor(&settings).document().last_name, "Garcia");
    }
}

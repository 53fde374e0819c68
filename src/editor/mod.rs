//! Editing session over one logbook.
//!
//! [`Editor`] is what the command line drives: each method is one user
//! action. Mutations go through the [`DocumentStore`] and every one of them
//! schedules a debounced save.

pub mod render;
pub mod visibility;

pub use render::{render_document, render_session, session_summary, show_document};
pub use visibility::{Section, VisibilityState};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::document::{
    DocumentStore, FieldPath, LogbookDocument, ResetConfirmation, SessionField, SessionId,
};
use crate::error::Result;
use crate::persistence::{PersistenceAdapter, SaveTiming, Storage};
use crate::ui::{Prompt, PromptResult, UserInterface};

/// Text shown while a save acknowledgment is visible.
pub const SAVED_MESSAGE: &str = "Sauvegardé";

/// Key of the reset confirmation prompt.
pub const RESET_PROMPT_KEY: &str = "reset_document";

/// The logbook being edited, its persistence and its on-screen state.
pub struct Editor {
    store: DocumentStore,
    persistence: PersistenceAdapter,
    visibility: VisibilityState,
}

impl Editor {
    /// Open the logbook held in `storage`.
    pub fn open(storage: Arc<dyn Storage>, timing: SaveTiming) -> Self {
        let persistence = PersistenceAdapter::new(storage, timing);
        let store = DocumentStore::new(persistence.load_or_default());
        debug!("Opened logbook from {}", persistence.storage().describe());
        Self {
            store,
            persistence,
            visibility: VisibilityState::default(),
        }
    }

    pub fn document(&self) -> &LogbookDocument {
        self.store.document()
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut VisibilityState {
        &mut self.visibility
    }

    /// Change one scalar field.
    pub fn input(&mut self, path: FieldPath, value: impl Into<String>) {
        let doc = self.store.set_field(path, value);
        self.persistence.schedule_save(doc);
    }

    /// Change one field of a session. Returns whether the session exists.
    pub fn input_session(
        &mut self,
        id: SessionId,
        field: SessionField,
        value: impl Into<String>,
    ) -> bool {
        let found = self.store.update_session(id, field, value);
        if found {
            self.persistence.schedule_save(self.store.document());
        }
        found
    }

    /// Append a blank session.
    pub fn add_session(&mut self) -> SessionId {
        let id = self.store.add_session();
        self.persistence.schedule_save(self.store.document());
        id
    }

    /// Delete a session. Returns whether the session existed.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        let found = self.store.remove_session(id);
        if found {
            self.persistence.schedule_save(self.store.document());
        }
        found
    }

    /// Expand or collapse a section. Returns the new state.
    pub fn toggle_section(&mut self, section: Section) -> bool {
        self.visibility.toggle(section)
    }

    /// Write the export file into `dir` and return its path.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        let file = self.persistence.export_as_file(self.store.document())?;
        let path = file.write_to(dir)?;
        info!("Exported logbook to {}", path.display());
        Ok(path)
    }

    /// Wipe the logbook after confirmation.
    ///
    /// With `force` the prompt is skipped. Otherwise the user must answer
    /// yes; any other answer leaves everything as it was. Returns whether
    /// the reset happened.
    pub fn reset(&mut self, ui: &mut dyn UserInterface, force: bool) -> Result<bool> {
        if !force {
            let prompt = Prompt::confirm(
                RESET_PROMPT_KEY,
                "Êtes-vous sûr de vouloir réinitialiser toutes les données ?",
                false,
            );
            if !matches!(ui.prompt(&prompt)?, PromptResult::Bool(true)) {
                debug!("Reset declined");
                return Ok(false);
            }
        }

        self.store
            .reset_document(ResetConfirmation::granted(), &mut self.persistence);
        Ok(true)
    }

    /// The save acknowledgment text, while it is visible.
    pub fn save_message(&self) -> Option<&'static str> {
        self.persistence.acknowledgment().map(|_| SAVED_MESSAGE)
    }

    /// Write any pending save now.
    pub fn flush(&self) -> Result<()> {
        self.persistence.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HealthField;
    use crate::persistence::{MemoryStorage, DEFAULT_ACK_DURATION};
    use crate::ui::MockUI;
    use std::time::Duration;
    use tempfile::TempDir;

    fn slow_timing() -> SaveTiming {
        SaveTiming {
            delay: Duration::from_secs(30),
            ack_duration: DEFAULT_ACK_DURATION,
        }
    }

    fn open_with(storage: &Arc<MemoryStorage>) -> Editor {
        Editor::open(storage.clone(), slow_timing())
    }

    #[test]
    fn open_loads_saved_document() {
        let storage = Arc::new(MemoryStorage::with_contents(r#"{"prenom": "Léa"}"#));
        let editor = open_with(&storage);
        assert_eq!(editor.document().first_name, "Léa");
        assert_eq!(editor.visibility(), &VisibilityState::default());
    }

    #[test]
    fn edits_are_saved_once_on_flush() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);

        editor.input(FieldPath::LastName, "Martin");
        editor.input(FieldPath::Health(HealthField::Sleep), "8h");
        let id = editor.add_session();
        assert!(editor.input_session(id, SessionField::ActivityName, "Basket"));
        editor.flush().unwrap();

        assert_eq!(storage.write_count(), 1);
        let reopened = open_with(&storage);
        assert_eq!(reopened.document(), editor.document());
        assert_eq!(reopened.document().session(id).unwrap().activity_name, "Basket");
    }

    #[test]
    fn unknown_session_edits_do_not_save() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);

        assert!(!editor.input_session(SessionId::from_raw(9), SessionField::Date, "x"));
        assert!(!editor.remove_session(SessionId::from_raw(9)));
        editor.flush().unwrap();

        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn save_message_appears_after_write() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        assert!(editor.save_message().is_none());

        editor.input(FieldPath::ClassName, "1ère S");
        editor.flush().unwrap();
        assert_eq!(editor.save_message(), Some(SAVED_MESSAGE));
    }

    #[test]
    fn confirmed_reset_restores_default() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        editor.input(FieldPath::LastName, "Martin");
        editor.add_session();
        editor.flush().unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response(RESET_PROMPT_KEY, "yes");
        assert!(editor.reset(&mut ui, false).unwrap());

        assert_eq!(editor.document(), &LogbookDocument::default());
        assert!(storage.contents().is_none());
        assert_eq!(open_with(&storage).document(), &LogbookDocument::default());
        assert_eq!(ui.prompts_shown(), &[RESET_PROMPT_KEY]);
    }

    #[test]
    fn declined_reset_keeps_everything() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        editor.input(FieldPath::LastName, "Martin");
        editor.flush().unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response(RESET_PROMPT_KEY, "non");
        assert!(!editor.reset(&mut ui, false).unwrap());

        assert_eq!(editor.document().last_name, "Martin");
        assert!(storage.contents().is_some());
    }

    #[test]
    fn unanswered_reset_is_declined() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        editor.input(FieldPath::LastName, "Martin");

        let mut ui = MockUI::new();
        assert!(!editor.reset(&mut ui, false).unwrap());
        assert_eq!(editor.document().last_name, "Martin");
    }

    #[test]
    fn forced_reset_skips_prompt() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        editor.input(FieldPath::LastName, "Martin");

        let mut ui = MockUI::new();
        assert!(editor.reset(&mut ui, true).unwrap());
        assert!(ui.prompts_shown().is_empty());
        assert!(editor.document().is_blank());

        // The pending edit was dropped, not written after the clear.
        editor.flush().unwrap();
        assert!(storage.contents().is_none());
    }

    #[test]
    fn toggle_section_is_not_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);

        assert!(editor.toggle_section(Section::Collaboration));
        editor.flush().unwrap();

        assert_eq!(storage.write_count(), 0);
        assert!(!open_with(&storage).visibility().is_expanded(Section::Collaboration));
    }

    #[test]
    fn download_writes_named_file() {
        let storage = Arc::new(MemoryStorage::new());
        let mut editor = open_with(&storage);
        editor.input(FieldPath::LastName, "Martin");
        editor.input(FieldPath::FirstName, "Léa");

        let dir = TempDir::new().unwrap();
        let path = editor.download(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "Carnet_EPS_Martin_Léa.json");
        let exported: LogbookDocument =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(&exported, editor.document());
    }
}

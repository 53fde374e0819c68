//! The document store and its mutation API.
//!
//! The free functions are pure: they take the current document by reference
//! and return the next one, leaving the input untouched. [`DocumentStore`]
//! holds the current value and swaps in each returned document.

use tracing::{debug, warn};

use crate::persistence::{PersistenceAdapter, Storage};

use super::{ActivitySession, FieldPath, LogbookDocument, SessionField, SessionId, SessionIdMinter};

/// Read the persisted logbook, falling back to the default document.
///
/// A missing record, a storage read error, and a record that does not parse
/// as a logbook all yield [`LogbookDocument::default`]. Nothing is reported
/// to the caller. An unparsable record is moved aside first so the next
/// save does not overwrite it.
pub fn load_or_default(storage: &dyn Storage) -> LogbookDocument {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved logbook in {}, starting blank", storage.describe());
            return LogbookDocument::default();
        }
        Err(e) => {
            warn!("Could not read {}: {}", storage.describe(), e);
            return LogbookDocument::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            match storage.set_aside() {
                Ok(Some(kept)) => warn!(
                    "Unreadable logbook in {} ({}), moved to {}",
                    storage.describe(),
                    e,
                    kept
                ),
                Ok(None) => warn!(
                    "Ignoring unreadable logbook in {}: {}",
                    storage.describe(),
                    e
                ),
                Err(aside) => warn!(
                    "Ignoring unreadable logbook in {}: {} (could not move it aside: {})",
                    storage.describe(),
                    e,
                    aside
                ),
            }
            LogbookDocument::default()
        }
    }
}

/// Return a copy of `doc` with the field at `path` replaced.
pub fn set_field(
    doc: &LogbookDocument,
    path: FieldPath,
    value: impl Into<String>,
) -> LogbookDocument {
    let mut next = doc.clone();
    *path.slot(&mut next) = value.into();
    next
}

/// Return a copy of `doc` with a blank session appended, and the new id.
pub fn add_session(
    doc: &LogbookDocument,
    ids: &mut SessionIdMinter,
) -> (LogbookDocument, SessionId) {
    let id = ids.mint(&doc.activity_sessions);
    let mut next = doc.clone();
    next.activity_sessions.push(ActivitySession::new(id));
    (next, id)
}

/// Return a copy of `doc` with one field of session `id` replaced.
///
/// An unknown `id` yields an identical document.
pub fn update_session(
    doc: &LogbookDocument,
    id: SessionId,
    field: SessionField,
    value: impl Into<String>,
) -> LogbookDocument {
    let mut next = doc.clone();
    if let Some(session) = next.activity_sessions.iter_mut().find(|s| s.id == id) {
        session.set(field, value);
    }
    next
}

/// Return a copy of `doc` without session `id`.
///
/// An unknown `id` yields an identical document.
pub fn remove_session(doc: &LogbookDocument, id: SessionId) -> LogbookDocument {
    let mut next = doc.clone();
    next.activity_sessions.retain(|s| s.id != id);
    next
}

/// Proof that the user agreed to wipe the logbook.
///
/// Only obtainable from a confirmation prompt answered yes, or from an
/// explicit force flag, both of which live in the editor layer.
#[derive(Debug)]
pub struct ResetConfirmation {
    _private: (),
}

impl ResetConfirmation {
    pub(crate) fn granted() -> Self {
        Self { _private: () }
    }
}

/// Holds the single logbook being edited.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    current: LogbookDocument,
    ids: SessionIdMinter,
}

impl DocumentStore {
    /// Wrap an existing document.
    pub fn new(document: LogbookDocument) -> Self {
        Self {
            current: document,
            ids: SessionIdMinter::new(),
        }
    }

    /// Rehydrate from storage.
    pub fn load_or_default(storage: &dyn Storage) -> Self {
        Self::new(load_or_default(storage))
    }

    /// The current document.
    pub fn document(&self) -> &LogbookDocument {
        &self.current
    }

    /// Replace one scalar field.
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) -> &LogbookDocument {
        self.current = set_field(&self.current, path, value);
        &self.current
    }

    /// Append a blank session and return its id.
    pub fn add_session(&mut self) -> SessionId {
        let (next, id) = add_session(&self.current, &mut self.ids);
        self.current = next;
        debug!("Added session {}", id);
        id
    }

    /// Replace one field of a session. Returns whether a session matched.
    pub fn update_session(
        &mut self,
        id: SessionId,
        field: SessionField,
        value: impl Into<String>,
    ) -> bool {
        if self.current.session(id).is_none() {
            return false;
        }
        self.current = update_session(&self.current, id, field, value);
        true
    }

    /// Remove a session. Returns whether a session matched.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        if self.current.session(id).is_none() {
            return false;
        }
        self.current = remove_session(&self.current, id);
        debug!("Removed session {}", id);
        true
    }

    /// Wipe the document and its persisted record.
    pub fn reset_document(
        &mut self,
        _confirmation: ResetConfirmation,
        persistence: &mut PersistenceAdapter,
    ) -> &LogbookDocument {
        self.current = LogbookDocument::default();
        persistence.clear_persisted();
        &self.current
    }
}

//! Bridge between the document store and durable storage.
//!
//! - [`Storage`] with [`FileStorage`] and [`MemoryStorage`]
//! - [`SaveScheduler`] for debounced background writes
//! - [`export_as_file`] for the portable JSON export
//! - [`PersistenceAdapter`] tying them together for the editor

mod debounce;
mod export;
mod storage;

pub use debounce::{
    Acknowledgment, SaveScheduler, SaveTiming, DEFAULT_ACK_DURATION, DEFAULT_SAVE_DELAY,
};
pub use export::{export_as_file, export_file_name, ExportFile, FALLBACK_LAST_NAME};
pub use storage::{FileStorage, MemoryStorage, Storage, STORAGE_KEY};

use std::sync::Arc;

use tracing::{info, warn};

use crate::document::{self, LogbookDocument};
use crate::error::Result;

/// Loads, autosaves, clears and exports the logbook.
pub struct PersistenceAdapter {
    storage: Arc<dyn Storage>,
    scheduler: SaveScheduler,
}

impl PersistenceAdapter {
    /// Create an adapter over `storage`.
    pub fn new(storage: Arc<dyn Storage>, timing: SaveTiming) -> Self {
        let scheduler = SaveScheduler::new(Arc::clone(&storage), timing);
        Self { storage, scheduler }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Read the persisted logbook or the default one.
    pub fn load_or_default(&self) -> LogbookDocument {
        document::load_or_default(self.storage.as_ref())
    }

    /// Debounced save of `document`.
    pub fn schedule_save(&self, document: &LogbookDocument) {
        self.scheduler.schedule(document);
    }

    /// Write any pending save now.
    pub fn flush(&self) -> Result<()> {
        self.scheduler.flush()
    }

    /// Remove the persisted record, dropping any pending save first.
    ///
    /// Returns once the record is gone, after any save already being written.
    pub fn clear_persisted(&mut self) {
        match self.scheduler.clear() {
            Ok(()) => info!("Cleared saved logbook in {}", self.storage.describe()),
            Err(e) => warn!("Could not clear {}: {}", self.storage.describe(), e),
        }
    }

    /// Render the export of `document`.
    pub fn export_as_file(&self, document: &LogbookDocument) -> Result<ExportFile> {
        export_as_file(document)
    }

    /// The latest save acknowledgment, while it is visible.
    pub fn acknowledgment(&self) -> Option<Acknowledgment> {
        self.scheduler.acknowledgment()
    }
}

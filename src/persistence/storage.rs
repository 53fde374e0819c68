//! Durable storage for the single logbook record.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;

/// Name of the persisted record.
pub const STORAGE_KEY: &str = "carnetEPS";

/// Storage holding one serialized logbook.
///
/// Implementations must be shareable with the background save worker.
pub trait Storage: Send + Sync {
    /// Read the record, `None` when nothing has been saved.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the record.
    fn write(&self, contents: &str) -> Result<()>;

    /// Remove the record. Removing a missing record succeeds.
    fn clear(&self) -> Result<()>;

    /// Human-readable location for logs and messages.
    fn describe(&self) -> String;

    /// Move an unreadable record aside so the next write cannot destroy it.
    ///
    /// Returns where the copy went, or `None` when the storage keeps none.
    fn set_aside(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage for the standard record inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(format!("{}.json", STORAGE_KEY)))
    }

    /// The record path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Write-to-temp-then-rename so a crash never leaves a partial record.
    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn set_aside(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let kept = self
            .path
            .with_file_name(format!("{}.unreadable-{}.json", STORAGE_KEY, stamp));
        fs::rename(&self.path, &kept)?;
        Ok(Some(kept.display().to_string()))
    }
}

/// In-memory storage that records every write.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
    writes: Mutex<Vec<String>>,
    set_aside: Mutex<Vec<String>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage already holding a record.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            record: Mutex::new(Some(contents.to_string())),
            ..Self::default()
        }
    }

    /// The current record.
    pub fn contents(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Every write performed, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Records moved aside as unreadable, oldest first.
    pub fn set_aside_records(&self) -> Vec<String> {
        self.set_aside
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of writes performed.
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(contents.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn set_aside(&self) -> Result<Option<String>> {
        let taken = self.record.lock().unwrap_or_else(|e| e.into_inner()).take();
        let Some(raw) = taken else {
            return Ok(None);
        };
        let mut kept = self.set_aside.lock().unwrap_or_else(|e| e.into_inner());
        kept.push(raw);
        Ok(Some(format!("memory (copy {})", kept.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_missing_record_reads_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn file_storage_write_then_read() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(&temp.path().join("nested").join("dir"));

        storage.write("{\"nom\":\"A\"}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"nom\":\"A\"}"));
        assert!(storage.path().ends_with("carnetEPS.json"));
    }

    #[test]
    fn file_storage_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        storage.write("{}").unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["carnetEPS.json".to_string()]);
    }

    #[test]
    fn file_storage_clear_removes_record() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        storage.write("{}").unwrap();

        storage.clear().unwrap();
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn file_storage_clear_missing_record_succeeds() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        assert!(storage.clear().is_ok());
    }

    #[test]
    fn file_storage_set_aside_keeps_copy() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        storage.write("{ cassé").unwrap();

        let kept = storage.set_aside().unwrap().unwrap();
        assert!(storage.read().unwrap().is_none());
        assert!(kept.contains("carnetEPS.unreadable-"));
        assert_eq!(fs::read_to_string(&kept).unwrap(), "{ cassé");
    }

    #[test]
    fn file_storage_set_aside_without_record() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::in_dir(temp.path());
        assert!(storage.set_aside().unwrap().is_none());
    }

    #[test]
    fn memory_storage_counts_writes() {
        let storage = MemoryStorage::new();
        storage.write("a").unwrap();
        storage.write("b").unwrap();

        assert_eq!(storage.write_count(), 2);
        assert_eq!(storage.writes(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(storage.contents().as_deref(), Some("b"));

        storage.clear().unwrap();
        assert!(storage.contents().is_none());
    }
}

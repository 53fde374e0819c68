//! One-shot export of the logbook as a portable JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::LogbookDocument;
use crate::error::Result;

/// Placeholder used when the student has not entered a last name.
pub const FALLBACK_LAST_NAME: &str = "donnees";

/// A rendered export, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Write the export into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

/// Serialize `document` as pretty JSON (2-space indent) with its file name.
pub fn export_as_file(document: &LogbookDocument) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: export_file_name(document),
        contents: serde_json::to_string_pretty(document)?,
    })
}

/// `Carnet_EPS_<lastName or "donnees">_<firstName or "">.json`
pub fn export_file_name(document: &LogbookDocument) -> String {
    let last_name = if document.last_name.is_empty() {
        FALLBACK_LAST_NAME
    } else {
        document.last_name.as_str()
    };

    format!(
        "Carnet_EPS_{}_{}.json",
        sanitize(last_name),
        sanitize(&document.first_name)
    )
}

// Names go into a path; separators would escape the export directory.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

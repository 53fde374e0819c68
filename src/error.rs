//! Error types for Carnet operations.
//!
//! This module defines [`CarnetError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Reading the persisted logbook never fails: a missing or corrupt record
//!   falls back to the default document (see [`crate::document::load_or_default`])
//! - Background saves log their failures and are otherwise silent
//! - Everything the user invokes explicitly (export, config, parsing of
//!   command arguments) reports a `CarnetError`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Carnet operations.
#[derive(Debug, Error)]
pub enum CarnetError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A dotted field path that names no document field.
    #[error("Unknown field: {path}")]
    UnknownField { path: String },

    /// A session field name that names no session field.
    #[error("Unknown session field: {name}")]
    UnknownSessionField { name: String },

    /// A section name outside the fixed set of sections.
    #[error("Unknown section: {name}")]
    UnknownSection { name: String },

    /// A session identifier that could not be parsed.
    #[error("Invalid session id: {value}")]
    InvalidSessionId { value: String },

    /// A prompt was needed but no answer could be obtained.
    #[error("Cannot prompt for '{key}' in non-interactive mode")]
    PromptUnavailable { key: String },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Carnet operations.
pub type Result<T> = std::result::Result<T, CarnetError>;

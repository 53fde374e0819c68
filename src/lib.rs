//! Carnet - Logbook for physical education students.
//!
//! Carnet keeps a single "carnet EPS" per student: identity, health habits,
//! relationship to physical practice, activity sessions and semester reviews.
//! Every edit is saved to one local JSON record after a short quiet period,
//! and the whole logbook can be exported as a portable JSON file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and layering
//! - [`document`] - The logbook model and its pure mutation API
//! - [`editor`] - User actions, section visibility and rendering
//! - [`error`] - Error types and result aliases
//! - [`persistence`] - Storage, debounced saving and export
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use carnet::document::{set_field, FieldPath, LogbookDocument};
//! use carnet::persistence::export_file_name;
//!
//! let doc = set_field(&LogbookDocument::default(), FieldPath::LastName, "Durand");
//! assert_eq!(export_file_name(&doc), "Carnet_EPS_Durand_.json");
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod ui;

pub use error::{CarnetError, Result};

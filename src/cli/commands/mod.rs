//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that touches the
//! logbook opens it through [`open_editor`], so one-shot commands and the
//! interactive `edit` loop share the same load, autosave and flush path.

pub mod completions;
pub mod dispatcher;
pub mod edit;
pub mod export;
pub mod reset;
pub mod schema;
pub mod session;
pub mod set;
pub mod show;

pub use dispatcher::{open_editor, Command, CommandDispatcher, CommandResult};

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::document::{FieldPath, SessionField, SessionId};
use crate::editor::Section;

/// Carnet - Logbook for physical education students.
#[derive(Debug, Parser)]
#[command(name = "carnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.carnet/config.yml)
    #[arg(short, long, global = true, env = "CARNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the saved logbook
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the logbook (default if no command specified)
    Show(ShowArgs),

    /// Change one field of the logbook
    Set(SetArgs),

    /// Manage activity sessions
    Session(SessionArgs),

    /// Write the logbook to a portable JSON file
    Export(ExportArgs),

    /// Erase the whole logbook
    Reset(ResetArgs),

    /// Edit the logbook interactively
    Edit,

    /// Print the JSON schema of the logbook
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Expand every section
    #[arg(short, long)]
    pub all: bool,

    /// Flip a section from its default state (repeatable)
    #[arg(short, long = "toggle", value_name = "SECTION")]
    pub toggle: Vec<Section>,

    /// Print the raw JSON record instead
    #[arg(long, conflicts_with_all = ["all", "toggle"])]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Dotted field path (e.g. `nom`, `sante.sommeil`, `bilans.final`)
    pub path: FieldPath,

    /// New value; may be empty
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the `session` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionAction,
}

/// Session subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SessionAction {
    /// Append a blank session and print its id
    Add,

    /// List sessions in order
    List,

    /// Change one field of a session
    Update {
        /// Session id
        id: SessionId,

        /// Field name (e.g. `apsa`, `date`, `effortAvant`)
        field: SessionField,

        /// New value; may be empty
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete a session
    Remove {
        /// Session id
        id: SessionId,
    },
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExportArgs {
    /// Directory to write into (overrides the configured export directory)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Print the schema of config.yml instead
    #[arg(long)]
    pub settings: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

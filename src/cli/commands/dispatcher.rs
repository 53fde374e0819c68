//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::config::Settings;
use crate::editor::Editor;
use crate::error::Result;
use crate::persistence::FileStorage;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Open the logbook stored under the configured data directory.
pub fn open_editor(settings: &Settings) -> Editor {
    let storage = FileStorage::in_dir(&settings.data_dir);
    Editor::open(Arc::new(storage), settings.timing)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher over resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Set(args)) => {
                let cmd = super::set::SetCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Session(args)) => {
                let cmd = super::session::SessionCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Export(args)) => {
                let cmd = super::export::ExportCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Reset(args)) => {
                let cmd = super::reset::ResetCommand::new(&self.settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Edit) => {
                let cmd = super::edit::EditCommand::new(&self.settings);
                cmd.execute(ui)
            }
            Some(Commands::Schema(args)) => {
                let cmd = super::schema::SchemaCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to show with default visibility
                let cmd = super::show::ShowCommand::new(&self.settings, ShowArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SaveTiming;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn settings_in(temp: &TempDir) -> Settings {
        Settings {
            data_dir: temp.path().join("data"),
            export_dir: temp.path().join("exports"),
            timing: SaveTiming::default(),
        }
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_stores_settings() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(settings_in(&temp));
        assert_eq!(dispatcher.settings().data_dir, temp.path().join("data"));
    }

    #[test]
    fn no_subcommand_shows_logbook() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(settings_in(&temp));
        let cli = Cli::parse_from(["carnet"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("Présentation"));
    }

    #[test]
    fn set_then_show_through_dispatcher() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(settings_in(&temp));
        let mut ui = MockUI::new();

        let set = Cli::parse_from(["carnet", "set", "classe", "Terminale 3"]);
        assert!(dispatcher.dispatch(&set, &mut ui).unwrap().success);

        let show = Cli::parse_from(["carnet", "show"]);
        dispatcher.dispatch(&show, &mut ui).unwrap();
        assert!(ui.has_message("Terminale 3"));
    }
}

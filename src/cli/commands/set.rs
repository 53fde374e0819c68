//! Set command implementation.
//!
//! The `carnet set <path> <value>` command changes one field and writes the
//! logbook before exiting.

use crate::cli::args::SetArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{open_editor, Command, CommandResult};

/// The set command implementation.
pub struct SetCommand {
    settings: Settings,
    args: SetArgs,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(settings: &Settings, args: SetArgs) -> Self {
        Self {
            settings: settings.clone(),
            args,
        }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut editor = open_editor(&self.settings);
        editor.input(self.args.path, self.args.value.clone());
        editor.flush()?;

        ui.success(&format!("{} mis à jour", self.args.path.label()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{FieldPath, HealthField};
    use crate::persistence::{FileStorage, SaveTiming, Storage};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            data_dir: temp.path().to_path_buf(),
            export_dir: temp.path().to_path_buf(),
            timing: SaveTiming::default(),
        }
    }

    #[test]
    fn set_writes_before_returning() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();
        let args = SetArgs {
            path: FieldPath::Health(HealthField::Diet),
            value: "Équilibrée".to_string(),
        };

        let result = SetCommand::new(&settings, args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Alimentation"));
        let raw = FileStorage::in_dir(temp.path()).read().unwrap().unwrap();
        assert!(raw.contains("\"alimentation\":\"Équilibrée\""));
    }

    #[test]
    fn set_keeps_other_fields() {
        let temp = TempDir::new().unwrap();
        let settings = settings(&temp);
        let mut ui = MockUI::new();

        for (path, value) in [(FieldPath::LastName, "Petit"), (FieldPath::FirstName, "Noé")] {
            let args = SetArgs {
                path,
                value: value.to_string(),
            };
            SetCommand::new(&settings, args).execute(&mut ui).unwrap();
        }

        let editor = open_editor(&settings);
        assert_eq!(editor.document().last_name, "Petit");
        assert_eq!(editor.document().first_name, "Noé");
    }
}

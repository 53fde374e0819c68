//! Terminal UI used when `carnet` runs attended.
//!
//! Status lines go to stdout. Warnings and errors go to stderr so that
//! `carnet show --json > carnet.json` stays clean.

use std::fmt::Display;
use std::io::Write;

use console::Term;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, CarnetTheme, NonInteractiveUI, OutputMode, Prompt,
    PromptResult, UserInterface,
};

/// Importance of a line, checked against the output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Hint,
    Status,
    Error,
}

fn shown(mode: OutputMode, level: Level) -> bool {
    match level {
        Level::Hint => mode.shows_hints(),
        Level::Status => mode.shows_status(),
        Level::Error => true,
    }
}

/// Colored, prompt-capable UI on the attached terminal.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CarnetTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CarnetTheme::new()
        } else {
            CarnetTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    fn print(&mut self, level: Level, line: impl Display) {
        if shown(self.mode, level) {
            writeln!(self.out, "{}", line).ok();
        }
    }

    fn eprint(&mut self, level: Level, line: impl Display) {
        if shown(self.mode, level) {
            writeln!(self.err, "{}", line).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.print(Level::Status, msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.print(Level::Status, line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.format_warning(msg);
        self.eprint(Level::Status, line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.eprint(Level::Error, line);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.out)
    }

    fn show_header(&mut self, title: &str) {
        let line = format!("\n{}\n", self.theme.format_header(title));
        self.print(Level::Status, line);
    }

    fn show_hint(&mut self, hint: &str) {
        let line = format!("  {}", self.theme.hint.apply_to(hint));
        self.print(Level::Hint, line);
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Pick the terminal UI when stdout is a terminal, the scripted one otherwise.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

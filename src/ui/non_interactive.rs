//! Non-interactive UI for pipes, scripts and CI.

use std::collections::HashMap;

use crate::error::{CarnetError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables that answer prompts.
const PROMPT_ENV_PREFIX: &str = "CARNET_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `CARNET_PROMPT_<KEY>` environment variables,
/// then from the prompt default. Confirmations without either are refused.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let is_confirm = matches!(prompt.prompt_type, PromptType::Confirm);

        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref());

        match answer {
            Some(value) if is_confirm => Ok(PromptResult::Bool(parse_yes(value))),
            Some(value) => Ok(PromptResult::String(value.clone())),
            None => Err(CarnetError::PromptUnavailable {
                key: prompt.key.clone(),
            }),
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("  {}", hint);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

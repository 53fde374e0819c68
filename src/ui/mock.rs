//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use carnet::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("reset_document", "yes");
//!
//! let answer = ui.prompt(&Prompt::confirm("reset_document", "Tout effacer ?", false)).unwrap();
//! assert_eq!(answer.as_bool(), Some(true));
//!
//! ui.success("Carnet réinitialisé");
//! assert!(ui.has_success("réinitialisé"));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{CarnetError, Result};

use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked repeatedly.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.hints.clear();
        self.prompts_shown.clear();
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let is_confirm = matches!(prompt.prompt_type, PromptType::Confirm);
        let response = self
            .next_response(&prompt.key)
            .or_else(|| prompt.default.clone());

        match response {
            Some(value) if is_confirm => Ok(PromptResult::Bool(parse_yes(&value))),
            Some(value) => Ok(PromptResult::String(value)),
            None if is_confirm => Ok(PromptResult::Bool(false)),
            None => Err(CarnetError::PromptUnavailable {
                key: prompt.key.clone(),
            }),
        }
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert!(ui.has_error("Oops"));
    }

    #[test]
    fn mock_ui_prompt_with_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("field_value", "Dupont");

        let result = ui.prompt(&Prompt::input("field_value", "Nom", "")).unwrap();
        assert_eq!(result.as_string(), "Dupont");
        assert_eq!(ui.prompts_shown(), &["field_value"]);
    }

    #[test]
    fn mock_ui_prompt_falls_back_to_default() {
        let mut ui = MockUI::new();
        let result = ui.prompt(&Prompt::input("nom", "Nom", "Martin")).unwrap();
        assert_eq!(result.as_string(), "Martin");
    }

    #[test]
    fn mock_ui_queue_is_consumed_in_order() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("action", vec!["add_session", "quit"]);
        let prompt = Prompt::select(
            "action",
            "Action",
            vec![PromptOption::new("Quitter", "quit")],
        );

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "add_session");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "quit");
        assert!(ui.prompt(&prompt).is_err());
    }

    #[test]
    fn mock_ui_confirm_parses_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("reset_document", "oui");

        let prompt = Prompt::confirm("reset_document", "Tout effacer ?", false);
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn mock_ui_confirm_without_anything_is_no() {
        let mut ui = MockUI::new();
        let prompt = Prompt {
            key: "confirm".to_string(),
            question: "?".to_string(),
            prompt_type: PromptType::Confirm,
            default: None,
        };
        assert_eq!(ui.prompt(&prompt).unwrap().as_bool(), Some(false));
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Séance ajoutée");
        ui.success("Sauvegardé");
        ui.error("Échec de l'export");

        assert!(ui.has_message("Séance"));
        assert!(ui.has_success("Sauvegardé"));
        assert!(ui.has_error("export"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.show_hint("hint");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn mock_ui_set_interactive() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}

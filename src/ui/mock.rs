//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirm responses.
//!
//! # Example
//!
//! ```
//! use piton::ui::{ConfirmPrompt, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_confirm_response("install_now", true);
//!
//! // Use ui in code under test...
//! ui.message("Checking dependencies");
//! ui.success("All present");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Checking dependencies"));
//! assert!(ui.has_success("All present"));
//! ```

use std::collections::HashMap;

use crate::error::{PitonError, Result};

use super::{ConfirmPrompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured confirm responses.
/// An unconfigured confirm behaves like a non-interactive terminal and
/// returns `PromptUnavailable`.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    commands: Vec<String>,
    output_blocks: Vec<(String, String)>,
    spinners: Vec<String>,
    confirm_responses: HashMap<String, bool>,
    confirms_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for a confirm key. Also marks the mock interactive.
    pub fn set_confirm_response(&mut self, key: &str, response: bool) {
        self.confirm_responses.insert(key.to_string(), response);
        self.interactive = true;
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

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured manual commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured output blocks as (title, output).
    pub fn output_blocks(&self) -> &[(String, String)] {
        &self.output_blocks
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all confirms that were shown (by key).
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific manual command was shown.
    pub fn has_command(&self, cmd: &str) -> bool {
        self.commands.iter().any(|m| m.contains(cmd))
    }

    /// Check if any output block contains the given text.
    pub fn has_output(&self, text: &str) -> bool {
        self.output_blocks.iter().any(|(_, o)| o.contains(text))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.hints.clear();
        self.commands.clear();
        self.output_blocks.clear();
        self.spinners.clear();
        self.confirms_shown.clear();
    }
}

impl UserInterface for MockUI {
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

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        self.output_blocks
            .push((title.to_string(), output.to_string()));
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        self.confirms_shown.push(prompt.key.clone());

        if let Some(response) = self.confirm_responses.get(&prompt.key) {
            return Ok(*response);
        }

        Err(PitonError::PromptUnavailable {
            key: prompt.key.clone(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that swallows everything (for MockUI).
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.hint("Try this");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.hints(), &["Try this"]);
    }

    #[test]
    fn mock_ui_confirm_with_response() {
        let mut ui = MockUI::new();
        ui.set_confirm_response("install_now", true);

        let prompt = ConfirmPrompt::new("install_now", "Install?", false);

        assert!(ui.confirm(&prompt).unwrap());
        assert_eq!(ui.confirms_shown(), &["install_now"]);
    }

    #[test]
    fn mock_ui_confirm_without_response_errors() {
        let mut ui = MockUI::new();

        let prompt = ConfirmPrompt::new("install_now", "Install?", false);

        assert!(matches!(
            ui.confirm(&prompt),
            Err(PitonError::PromptUnavailable { .. })
        ));
    }

    #[test]
    fn mock_ui_captures_commands_and_blocks() {
        let mut ui = MockUI::new();

        ui.show_command("python3 -m pip install requests>=2.31.0");
        ui.show_output_block("Installer output", "some error text");

        assert!(ui.has_command("pip install"));
        assert!(ui.has_output("some error text"));
    }

    #[test]
    fn mock_ui_captures_spinners() {
        let mut ui = MockUI::new();

        let _spinner = ui.start_spinner("Installing dependencies");

        assert_eq!(ui.spinners(), &["Installing dependencies"]);
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Checking environment");
        ui.success("Complete!");
        ui.error("Failed to connect");

        assert!(ui.has_message("Checking"));
        assert!(ui.has_success("Complete"));
        assert!(ui.has_error("Failed"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.show_command("cmd");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.commands().is_empty());
    }

    #[test]
    fn mock_ui_set_interactive() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn set_confirm_response_implies_interactive() {
        let mut ui = MockUI::new();
        ui.set_confirm_response("key", false);
        assert!(ui.is_interactive());
    }
}

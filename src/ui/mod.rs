//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless/piped environments
//! - [`MockUI`] for deterministic tests
//!
//! The install confirmation is routed through [`UserInterface::confirm`],
//! so the bootstrapper never reads stdin directly and tests never need a
//! real terminal.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PitonTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint.
    fn hint(&mut self, msg: &str);

    /// Display a command the user could run manually.
    fn show_command(&mut self, command: &str);

    /// Display a block of captured subprocess output under a title.
    fn show_output_block(&mut self, title: &str, output: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool>;

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    /// Unique key for the prompt (used for lookup in mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the user just presses enter.
    pub default: bool,
}

impl ConfirmPrompt {
    /// Create a confirm prompt.
    pub fn new(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_prompt_holds_fields() {
        let prompt = ConfirmPrompt::new("install_now", "Install them now?", false);
        assert_eq!(prompt.key, "install_now");
        assert_eq!(prompt.question, "Install them now?");
        assert!(!prompt.default);
    }
}

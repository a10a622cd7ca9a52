//! Non-interactive UI for CI/headless/piped environments.

use crate::error::{PitonError, Result};

use super::{ConfirmPrompt, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompting is impossible here: a confirm request is an error rather than
/// a hang waiting for input that will never arrive.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✅ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠️ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("❌ {}", msg);
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("💡 {}", msg);
        }
    }

    fn show_command(&mut self, command: &str) {
        println!();
        println!("    `{}`", command);
        println!();
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        println!("    ┌─ {} ──────────────────────────", title);
        for line in output.lines() {
            println!("    │ {}", line);
        }
        println!("    └────────────────────────────────────");
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        Err(PitonError::PromptUnavailable {
            key: prompt.key.clone(),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✅ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("❌ {}", msg);
    }
}

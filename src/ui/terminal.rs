//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::prompts::confirm_user;
use super::{
    should_use_colors, ConfirmPrompt, NonInteractiveUI, OutputMode, PitonTheme, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: PitonTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PitonTheme::new()
        } else {
            PitonTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_hint(msg)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.term).ok();
        writeln!(
            self.term,
            "    {}",
            self.theme.command.apply_to(format!("`{}`", command))
        )
        .ok();
        writeln!(self.term).ok();
    }

    fn show_output_block(&mut self, title: &str, output: &str) {
        let b = &self.theme.border;
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("┌─"),
            b.apply_to(format!("{} ──────────────────────────", title))
        )
        .ok();
        for line in output.lines() {
            writeln!(self.term, "    {} {}", b.apply_to("│"), line).ok();
        }
        writeln!(
            self.term,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        confirm_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term() && crate::shell::stdin_is_tty()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

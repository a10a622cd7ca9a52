//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{PitonError, Result};

use super::ConfirmPrompt;

/// Convert dialoguer errors to PitonError.
fn map_dialoguer_err(e: dialoguer::Error) -> PitonError {
    PitonError::Other(anyhow::Error::new(e))
}

/// Ask a yes/no question on the given terminal.
pub fn confirm_user(prompt: &ConfirmPrompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

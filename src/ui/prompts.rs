//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{Result, SetupError};

use super::{is_affirmative, Prompt};

/// Convert dialoguer errors to SetupError.
fn map_dialoguer_err(e: dialoguer::Error) -> SetupError {
    SetupError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on the terminal.
///
/// The answer is typed and confirmed with enter. It is judged the same way
/// as piped input: only `y` or `Y` means yes, an empty line takes the
/// prompt's default.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    let answer = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(format!("{} (y/n)", prompt.question))
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)?;

    if answer.is_empty() {
        return Ok(prompt.default);
    }
    Ok(is_affirmative(&answer))
}

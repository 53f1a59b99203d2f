//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait, the seam through which the bootstrapper
//!   reports progress and asks for confirmation
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped stdin, CI, and other headless runs
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use pysetup::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Environment ready");
//! ```

pub mod hints;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_confirm;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Show a contextual hint suggesting the next action.
    fn show_hint(&mut self, hint: &str);

    /// Show a failed command together with its captured output.
    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>);
}

/// A yes/no question to put to the operator.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used by mocks for lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the operator just presses enter.
    pub default: bool,
}

impl Prompt {
    /// Create a confirmation prompt that defaults to "no".
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            default: false,
        }
    }
}

/// Interpret a typed answer: only `y` or `Y` counts as yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_confirm_defaults_to_no() {
        let prompt = Prompt::confirm("recreate_env", "Recreate?");
        assert_eq!(prompt.key, "recreate_env");
        assert_eq!(prompt.question, "Recreate?");
        assert!(!prompt.default);
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Y\r\n"));
    }

    #[test]
    fn other_answers_are_negative() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("YES\n"));
        assert!(!is_affirmative(" y"));
    }
}

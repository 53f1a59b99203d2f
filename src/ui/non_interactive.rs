//! Non-interactive UI for piped input, CI, and headless environments.

use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::{is_affirmative, OutputMode, Prompt, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output is plain text. Confirmations print the question and read a
/// single line from the input (stdin by default); end of input counts as
/// a refusal.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            input: Box::new(io::BufReader::new(io::stdin())),
        }
    }

    /// Create with an explicit answer source (for testing).
    pub fn with_input(mode: OutputMode, input: impl BufRead + 'static) -> Self {
        Self {
            mode,
            input: Box::new(input),
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
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        print!("{} (y/n) ", prompt.question);
        io::stdout().flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)?;
        if read == 0 {
            println!();
            tracing::debug!("No answer for prompt '{}' (end of input)", prompt.key);
            return Ok(false);
        }

        if answer.trim_end_matches(['\r', '\n']).is_empty() {
            return Ok(prompt.default);
        }
        Ok(is_affirmative(&answer))
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  💡 {}", hint);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!();
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
        if let Some(h) = hint {
            eprintln!();
            eprintln!("    Hint: {}", h);
        }
    }
}

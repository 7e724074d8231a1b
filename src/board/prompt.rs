//! User Prompts
//!
//! Alerts and yes/no confirmations shown by the board.

use std::io::{BufRead, Write};

/// Surface for user-facing messages
pub trait Prompt {
    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means the user accepted
    fn confirm(&mut self, message: &str) -> bool;
}

/// Terminal prompt over any reader/writer pair
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{}", message) {
            tracing::warn!("Failed to write alert: {}", e);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{} [y/N] ", message)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Accepts every confirmation and logs alerts (for `--yes`)
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn alert(&mut self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!(question = message, "confirmation assumed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_yes() {
        for answer in ["y\n", "Yes\n", "  YES  \n"] {
            let mut prompt = ConsolePrompt::new(Cursor::new(answer), Vec::new());
            assert!(prompt.confirm("Remove?"), "answer {:?}", answer);
        }
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        for answer in ["n\n", "\n", "sure\n", ""] {
            let mut prompt = ConsolePrompt::new(Cursor::new(answer), Vec::new());
            assert!(!prompt.confirm("Remove?"), "answer {:?}", answer);
        }
    }

    #[test]
    fn test_confirm_and_alert_output() {
        let mut prompt = ConsolePrompt::new(Cursor::new("y\n"), Vec::new());
        prompt.confirm("Remove?");
        prompt.alert("Done");

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output, "Remove? [y/N] Done\n");
    }
}

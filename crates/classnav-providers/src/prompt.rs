//! Console prompt strategies

use classnav_domain::error::Result;
use classnav_domain::ports::Prompt;
use std::io::{BufRead, IsTerminal, Write};

/// Prompts on the controlling terminal via stdin/stderr
///
/// Declines (returns `Ok(None)`) when stdin is not a terminal, so
/// non-interactive invocations fall through to the next prompt backend
/// instead of hanging on a read.
#[derive(Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    /// Create the stdin-backed prompt
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn prompt(&self, question: &str) -> Result<Option<String>> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return Ok(None);
        }

        let mut stderr = std::io::stderr();
        write!(stderr, "{question} ")?;
        stderr.flush()?;

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

//! Interactive prompt port

use crate::error::Result;

/// Ask the user a question and read an answer
///
/// A backend that cannot currently prompt (no terminal attached, say)
/// returns `Ok(None)` so the next chain member gets a turn.
pub trait Prompt: Send + Sync {
    /// Prompt for input, returning the answer if this backend could ask
    fn prompt(&self, question: &str) -> Result<Option<String>>;
}

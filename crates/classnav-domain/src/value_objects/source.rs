//! Located source code value object

use crate::value_objects::FilePath;
use serde::{Deserialize, Serialize};

/// Source code produced by a source locator
///
/// Carries the code itself plus the path it was read from, when the locator
/// knows one (in-memory locators do not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCode {
    /// Where the code was read from, if anywhere
    pub path: Option<FilePath>,
    /// The source text
    pub code: String,
}

impl SourceCode {
    /// Source code with no backing file
    pub fn from_string<S: Into<String>>(code: S) -> Self {
        Self {
            path: None,
            code: code.into(),
        }
    }

    /// Source code read from a file
    pub fn with_path<S: Into<String>>(path: FilePath, code: S) -> Self {
        Self {
            path: Some(path),
            code: code.into(),
        }
    }

    /// Whether the located source is empty
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

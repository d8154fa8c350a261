//! Fully-qualified class name value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace separator in fully-qualified class names
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A fully-qualified class name, e.g. `Animals\Badger`
///
/// Stored in normalized form: no leading separator. Comparison and hashing
/// operate on the normalized string, so `\Animals\Badger` and
/// `Animals\Badger` are the same class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Create a class name, trimming any leading namespace separator
    pub fn new<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        let trimmed = name.trim_start_matches(NAMESPACE_SEPARATOR);
        if trimmed.len() == name.len() {
            Self(name)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// The full name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace segments, leaf last
    pub fn parts(&self) -> Vec<&str> {
        self.0.split(NAMESPACE_SEPARATOR).collect()
    }

    /// The unqualified (short) name, e.g. `Badger` for `Animals\Badger`
    pub fn short_name(&self) -> &str {
        self.0
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.0)
    }

    /// The namespace portion, `None` for a top-level class
    pub fn namespace(&self) -> Option<&str> {
        self.0.rfind(NAMESPACE_SEPARATOR).map(|i| &self.0[..i])
    }

    /// Whether the full name starts with the given namespace prefix
    ///
    /// The prefix is expected in composer form, i.e. with a trailing
    /// separator (`Animals\`). An empty prefix matches everything.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

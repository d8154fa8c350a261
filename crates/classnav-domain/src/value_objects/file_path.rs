//! File path value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A source file path
///
/// Thin wrapper over `PathBuf` so capability ports exchange a domain type
/// rather than raw paths. Paths are kept exactly as produced by the strategy
/// that created them; normalization is the producer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Wrap a path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }

    /// Borrow as a `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The file stem, if any (`Badger` for `src/Badger.php`)
    pub fn stem(&self) -> Option<&str> {
        self.0.file_stem().and_then(|s| s.to_str())
    }

    /// The extension, if any
    pub fn extension(&self) -> Option<&str> {
        self.0.extension().and_then(|s| s.to_str())
    }

    /// Whether the file currently exists on disk
    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    /// Join a relative segment onto this path
    pub fn join<P: AsRef<Path>>(&self, segment: P) -> Self {
        Self(self.0.join(segment))
    }

    /// Consume into the underlying `PathBuf`
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for FilePath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

impl From<&Path> for FilePath {
    fn from(p: &Path) -> Self {
        Self(p.to_path_buf())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

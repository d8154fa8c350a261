//! File listing port

use crate::error::Result;
use crate::value_objects::FilePath;

/// Enumerate the source files a strategy knows about
pub trait FileListProvider: Send + Sync {
    /// All files visible to this provider
    fn file_list(&self) -> Result<Vec<FilePath>>;
}

//! Class/file conversion ports

use crate::error::Result;
use crate::value_objects::{ClassName, FilePath};

/// Map a class name to the source file that would define it
///
/// `Ok(None)` means this strategy does not recognize the class — a normal
/// outcome, distinct from `Err` which signals a strategy fault.
pub trait ClassToFile: Send + Sync {
    /// Resolve a class name to a candidate source file
    fn class_to_file(&self, class: &ClassName) -> Result<Option<FilePath>>;
}

/// Map a source file back to the class it defines
pub trait FileToClass: Send + Sync {
    /// Resolve a file path to the class it would define
    fn file_to_class(&self, path: &FilePath) -> Result<Option<ClassName>>;
}

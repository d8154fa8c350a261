//! Source location port

use crate::error::Result;
use crate::value_objects::{ClassName, SourceCode};

/// Locate the source code defining a class
///
/// Locators are registered in priority order (stub signatures before
/// project sources); the first locator producing code wins.
pub trait SourceLocator: Send + Sync {
    /// Locate the source defining `class`, if this locator knows it
    fn locate(&self, class: &ClassName) -> Result<Option<SourceCode>>;
}

//! In-memory source locator

use classnav_domain::error::Result;
use classnav_domain::ports::SourceLocator;
use classnav_domain::value_objects::{ClassName, SourceCode};
use std::collections::HashMap;

/// Locates classes in sources held in memory
///
/// Used by wiring and tests where no filesystem is involved.
#[derive(Default)]
pub struct StringSourceLocator {
    sources: HashMap<ClassName, String>,
}

impl StringSourceLocator {
    /// An empty locator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class with its source text
    pub fn with_source<C: Into<ClassName>, S: Into<String>>(mut self, class: C, code: S) -> Self {
        self.sources.insert(class.into(), code.into());
        self
    }
}

impl SourceLocator for StringSourceLocator {
    fn locate(&self, class: &ClassName) -> Result<Option<SourceCode>> {
        Ok(self
            .sources
            .get(class)
            .map(|code| SourceCode::from_string(code.clone())))
    }
}

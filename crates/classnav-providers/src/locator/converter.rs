//! Converter-backed source locator

use classnav_domain::converter::ClassFileConverter;
use classnav_domain::error::Result;
use classnav_domain::ports::SourceLocator;
use classnav_domain::value_objects::{ClassName, SourceCode};
use std::sync::Arc;

/// Locates project sources through the class→file converter
///
/// A candidate file that does not exist on disk is treated as no match,
/// leaving the turn to the next locator in the chain.
pub struct ConverterSourceLocator {
    converter: Arc<ClassFileConverter>,
}

impl ConverterSourceLocator {
    /// Build a locator delegating to the given converter
    pub fn new(converter: Arc<ClassFileConverter>) -> Self {
        Self { converter }
    }
}

impl SourceLocator for ConverterSourceLocator {
    fn locate(&self, class: &ClassName) -> Result<Option<SourceCode>> {
        let Some(path) = self.converter.class_to_file(class)? else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let code = std::fs::read_to_string(path.as_path())?;
        Ok(Some(SourceCode::with_path(path, code)))
    }
}

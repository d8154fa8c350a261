//! File information service

use classnav_domain::converter::ClassFileConverter;
use classnav_domain::error::Result;
use classnav_domain::value_objects::{ClassName, FilePath};
use serde::Serialize;
use std::sync::Arc;

/// Report for a single source file
#[derive(Debug, Clone, Serialize)]
pub struct FileInfoReport {
    /// The queried file
    pub file: FilePath,
    /// Whether it exists on disk
    pub exists: bool,
    /// The class the converter chain derives for it, if any
    pub class: Option<ClassName>,
}

/// Answers "what is this file" through the converter facade
pub struct FileInfo {
    converter: Arc<ClassFileConverter>,
}

impl FileInfo {
    /// Build the service over the converter facade
    pub fn new(converter: Arc<ClassFileConverter>) -> Self {
        Self { converter }
    }

    /// Describe a file: existence plus the class it maps to
    pub fn for_file(&self, file: FilePath) -> Result<FileInfoReport> {
        let class = self.converter.file_to_class(&file)?;
        Ok(FileInfoReport {
            exists: file.exists(),
            file,
            class,
        })
    }
}

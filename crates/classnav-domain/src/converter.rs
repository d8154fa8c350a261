//! Bidirectional class/file converter facade

use crate::chain::Chain;
use crate::error::Result;
use crate::ports::{ClassToFile, FileToClass};
use crate::value_objects::{ClassName, FilePath};

/// Pair-combinator exposing both conversion directions
///
/// Holds one first-match chain per direction and dispatches on the operation
/// invoked. Pure delegation: no caching, no logic of its own.
#[derive(Clone)]
pub struct ClassFileConverter {
    to_file: Chain<dyn ClassToFile>,
    to_class: Chain<dyn FileToClass>,
}

impl std::fmt::Debug for ClassFileConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassFileConverter")
            .field("to_file", &self.to_file.len())
            .field("to_class", &self.to_class.len())
            .finish()
    }
}

impl ClassFileConverter {
    /// Combine a class→file chain and a file→class chain
    pub fn new(to_file: Chain<dyn ClassToFile>, to_class: Chain<dyn FileToClass>) -> Self {
        Self { to_file, to_class }
    }

    /// Resolve a class name to a source file
    pub fn class_to_file(&self, class: &ClassName) -> Result<Option<FilePath>> {
        self.to_file.class_to_file(class)
    }

    /// Resolve a source file to a class name
    pub fn file_to_class(&self, path: &FilePath) -> Result<Option<ClassName>> {
        self.to_class.file_to_class(path)
    }
}

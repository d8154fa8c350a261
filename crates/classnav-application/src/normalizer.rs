//! Class/file input normalization
//!
//! Console commands accept either a class name or a file path; this helper
//! decides which one it got and produces the other representation through
//! the converter facade.

use classnav_domain::converter::ClassFileConverter;
use classnav_domain::error::Result;
use classnav_domain::value_objects::{ClassName, FilePath};
use std::sync::Arc;

/// Normalizes "class name or file path" command input
pub struct ClassFileNormalizer {
    converter: Arc<ClassFileConverter>,
}

impl ClassFileNormalizer {
    /// Build the normalizer over the converter facade
    pub fn new(converter: Arc<ClassFileConverter>) -> Self {
        Self { converter }
    }

    /// Whether the input reads as a file path rather than a class name
    ///
    /// Anything with a path separator or a `.php` suffix is a file; class
    /// names use backslash namespaces and never carry an extension.
    pub fn looks_like_file(input: &str) -> bool {
        input.ends_with(".php") || input.contains('/')
    }

    /// Normalize input to a class name
    pub fn normalize_to_class(&self, input: &str) -> Result<Option<ClassName>> {
        if Self::looks_like_file(input) {
            self.converter.file_to_class(&FilePath::from(input))
        } else {
            Ok(Some(ClassName::new(input)))
        }
    }

    /// Normalize input to a file path
    pub fn normalize_to_file(&self, input: &str) -> Result<Option<FilePath>> {
        if Self::looks_like_file(input) {
            Ok(Some(FilePath::from(input)))
        } else {
            self.converter.class_to_file(&ClassName::new(input))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classnav_domain::chain::Chain;
    use classnav_domain::ports::{ClassToFile, FileToClass};
    use std::sync::Arc;

    struct BadgerPair;

    impl ClassToFile for BadgerPair {
        fn class_to_file(&self, class: &ClassName) -> Result<Option<FilePath>> {
            Ok((class.short_name() == "Badger").then(|| FilePath::from("src/Badger.php")))
        }
    }

    impl FileToClass for BadgerPair {
        fn file_to_class(&self, path: &FilePath) -> Result<Option<ClassName>> {
            Ok((path.stem() == Some("Badger")).then(|| ClassName::new("Animals\\Badger")))
        }
    }

    fn normalizer() -> ClassFileNormalizer {
        let pair = Arc::new(BadgerPair);
        ClassFileNormalizer::new(Arc::new(ClassFileConverter::new(
            Chain::new(vec![pair.clone() as Arc<dyn ClassToFile>]),
            Chain::new(vec![pair as Arc<dyn FileToClass>]),
        )))
    }

    #[test]
    fn classifies_input_shape() {
        assert!(ClassFileNormalizer::looks_like_file("src/Badger.php"));
        assert!(ClassFileNormalizer::looks_like_file("Badger.php"));
        assert!(!ClassFileNormalizer::looks_like_file("Animals\\Badger"));
        assert!(!ClassFileNormalizer::looks_like_file("Badger"));
    }

    #[test]
    fn converts_in_whichever_direction_the_input_needs() {
        let normalizer = normalizer();

        assert_eq!(
            normalizer.normalize_to_file("Animals\\Badger").unwrap(),
            Some(FilePath::from("src/Badger.php"))
        );
        assert_eq!(
            normalizer.normalize_to_class("src/Badger.php").unwrap(),
            Some(ClassName::new("Animals\\Badger"))
        );
        // already in the requested shape: passed through untouched
        assert_eq!(
            normalizer.normalize_to_class("Animals\\Badger").unwrap(),
            Some(ClassName::new("Animals\\Badger"))
        );
        assert_eq!(
            normalizer.normalize_to_file("src/Badger.php").unwrap(),
            Some(FilePath::from("src/Badger.php"))
        );
    }
}

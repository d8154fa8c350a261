//! Generic chain resolver
//!
//! A [`Chain`] composes an ordered list of strategies implementing one
//! capability port into a single object exposing the same port. The dispatch
//! policy is chosen per capability:
//!
//! - **first-match** (class→file, file→class, source locate, prompt): try
//!   members in registration order, return the first non-empty result.
//!   `Ok(None)` from every member is a normal empty outcome, not an error.
//! - **union** (file listing): query every member and concatenate results,
//!   deduplicated in first-seen order.
//!
//! Member faults (`Err`) propagate immediately in both policies; a broken
//! strategy is a configuration problem the caller must see, not something to
//! skip past.

use crate::error::Result;
use crate::ports::{ClassToFile, FileListProvider, FileToClass, Prompt, SourceLocator};
use crate::value_objects::{ClassName, FilePath, SourceCode};
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// An ordered list of strategies implementing one capability port
///
/// The chain owns the sequence, not the strategies themselves; members are
/// shared `Arc`s whose lifetime belongs to the service container.
pub struct Chain<T: ?Sized> {
    members: Vec<Arc<T>>,
}

impl<T: ?Sized> Chain<T> {
    /// Build a chain over the given members, tried in the given order
    pub fn new(members: Vec<Arc<T>>) -> Self {
        Self { members }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the chain has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members, in trial order
    pub fn members(&self) -> &[Arc<T>] {
        &self.members
    }

    /// First-match dispatch: the first member producing `Some` wins and
    /// later members are not consulted
    pub fn first_match<R>(&self, mut op: impl FnMut(&T) -> Result<Option<R>>) -> Result<Option<R>> {
        for member in &self.members {
            if let Some(result) = op(member)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    /// Union dispatch: every member is queried, results are concatenated and
    /// deduplicated preserving first-seen order
    pub fn union<R>(&self, mut op: impl FnMut(&T) -> Result<Vec<R>>) -> Result<Vec<R>>
    where
        R: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        let mut merged = Vec::new();
        for member in &self.members {
            for item in op(member)? {
                if seen.insert(item.clone()) {
                    merged.push(item);
                }
            }
        }
        Ok(merged)
    }
}

impl<T: ?Sized> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl ClassToFile for Chain<dyn ClassToFile> {
    fn class_to_file(&self, class: &ClassName) -> Result<Option<FilePath>> {
        self.first_match(|member| member.class_to_file(class))
    }
}

impl FileToClass for Chain<dyn FileToClass> {
    fn file_to_class(&self, path: &FilePath) -> Result<Option<ClassName>> {
        self.first_match(|member| member.file_to_class(path))
    }
}

impl SourceLocator for Chain<dyn SourceLocator> {
    fn locate(&self, class: &ClassName) -> Result<Option<SourceCode>> {
        self.first_match(|member| member.locate(class))
    }
}

impl Prompt for Chain<dyn Prompt> {
    fn prompt(&self, question: &str) -> Result<Option<String>> {
        self.first_match(|member| member.prompt(question))
    }
}

impl FileListProvider for Chain<dyn FileListProvider> {
    fn file_list(&self) -> Result<Vec<FilePath>> {
        self.union(|member| member.file_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClassToFile {
        answer: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl FixedClassToFile {
        fn new(answer: Option<&'static str>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ClassToFile for FixedClassToFile {
        fn class_to_file(&self, _class: &ClassName) -> Result<Option<FilePath>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.map(FilePath::from))
        }
    }

    struct FixedFileList(Vec<&'static str>);

    impl FileListProvider for FixedFileList {
        fn file_list(&self) -> Result<Vec<FilePath>> {
            Ok(self.0.iter().copied().map(FilePath::from).collect())
        }
    }

    struct FaultyFileList;

    impl FileListProvider for FaultyFileList {
        fn file_list(&self) -> Result<Vec<FilePath>> {
            Err(Error::process("backend unavailable"))
        }
    }

    #[test]
    fn first_match_returns_first_non_empty_result() {
        let miss = Arc::new(FixedClassToFile::new(None));
        let hit = Arc::new(FixedClassToFile::new(Some("src/Badger.php")));
        let shadowed = Arc::new(FixedClassToFile::new(Some("src/Other.php")));
        let chain: Chain<dyn ClassToFile> =
            Chain::new(vec![miss.clone(), hit.clone(), shadowed.clone()]);

        let found = chain
            .class_to_file(&ClassName::new("Animals\\Badger"))
            .unwrap();

        assert_eq!(found, Some(FilePath::from("src/Badger.php")));
        assert_eq!(miss.calls.load(Ordering::SeqCst), 1);
        assert_eq!(hit.calls.load(Ordering::SeqCst), 1);
        // the third member is never consulted once the second succeeded
        assert_eq!(shadowed.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn first_match_of_all_misses_is_empty_not_an_error() {
        let chain: Chain<dyn ClassToFile> = Chain::new(vec![
            Arc::new(FixedClassToFile::new(None)),
            Arc::new(FixedClassToFile::new(None)),
        ]);

        let found = chain.class_to_file(&ClassName::new("Unknown")).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn empty_chain_yields_empty_result() {
        let chain: Chain<dyn ClassToFile> = Chain::new(Vec::new());
        assert_eq!(
            chain.class_to_file(&ClassName::new("Anything")).unwrap(),
            None
        );
    }

    #[test]
    fn union_merges_and_deduplicates_in_order() {
        let chain: Chain<dyn FileListProvider> = Chain::new(vec![
            Arc::new(FixedFileList(vec!["a.php", "b.php"])),
            Arc::new(FixedFileList(vec!["b.php", "c.php"])),
        ]);

        let files = chain.file_list().unwrap();
        assert_eq!(
            files,
            vec![
                FilePath::from("a.php"),
                FilePath::from("b.php"),
                FilePath::from("c.php"),
            ]
        );
    }

    #[test]
    fn member_fault_propagates_instead_of_being_skipped() {
        let chain: Chain<dyn FileListProvider> = Chain::new(vec![
            Arc::new(FixedFileList(vec!["a.php"])),
            Arc::new(FaultyFileList),
        ]);

        let err = chain.file_list().unwrap_err();
        assert!(matches!(err, Error::Process { .. }));
    }
}

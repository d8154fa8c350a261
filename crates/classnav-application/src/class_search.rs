//! Class search by short name

use classnav_domain::converter::ClassFileConverter;
use classnav_domain::error::Result;
use classnav_domain::ports::FileListProvider;
use classnav_domain::value_objects::{ClassName, FilePath};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One search hit: a file whose stem matched, with the class it defines
/// when the converter chain recognizes it
#[derive(Debug, Clone, Serialize)]
pub struct ClassSearchResult {
    /// The matched source file
    pub file: FilePath,
    /// The class the file defines, if derivable
    pub class: Option<ClassName>,
}

/// Finds classes by their unqualified name
///
/// Walks the file-list chain, matches file stems against the query, and
/// maps each hit back to a class through the file→class chain.
pub struct ClassSearch {
    file_list: Arc<dyn FileListProvider>,
    converter: Arc<ClassFileConverter>,
}

impl ClassSearch {
    /// Build a search service over a file list and the converter facade
    pub fn new(file_list: Arc<dyn FileListProvider>, converter: Arc<ClassFileConverter>) -> Self {
        Self {
            file_list,
            converter,
        }
    }

    /// All files whose stem equals `short_name`, input order preserved
    pub fn search(&self, short_name: &str) -> Result<Vec<ClassSearchResult>> {
        let query = short_name.trim_end_matches(".php");
        let mut results = Vec::new();
        for file in self.file_list.file_list()? {
            if file.stem() != Some(query) {
                continue;
            }
            let class = self.converter.file_to_class(&file)?;
            results.push(ClassSearchResult { file, class });
        }
        debug!(query, hits = results.len(), "class search finished");
        Ok(results)
    }
}

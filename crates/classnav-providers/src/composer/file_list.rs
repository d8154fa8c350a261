//! File-list strategy over a composer autoload map

use crate::composer::AutoloaderMap;
use classnav_domain::error::Result;
use classnav_domain::ports::FileListProvider;
use classnav_domain::value_objects::FilePath;
use std::sync::Arc;
use walkdir::WalkDir;

/// Lists every `.php` file reachable from a map's autoload roots
///
/// PSR-4 base directories are walked recursively; classmap and bootstrap
/// files contribute as listed. Missing directories contribute nothing.
pub struct ComposerFileListProvider {
    map: Arc<AutoloaderMap>,
}

impl ComposerFileListProvider {
    /// Build a provider over a loaded map
    pub fn new(map: Arc<AutoloaderMap>) -> Self {
        Self { map }
    }
}

impl FileListProvider for ComposerFileListProvider {
    fn file_list(&self) -> Result<Vec<FilePath>> {
        let mut files = Vec::new();

        for entry in self.map.psr4() {
            for dir in &entry.dirs {
                for file in WalkDir::new(dir)
                    .sort_by_file_name()
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "php"))
                {
                    files.push(FilePath::from(file.into_path()));
                }
            }
        }

        for file in self.map.classmap_files() {
            files.push(FilePath::from(file.clone()));
        }
        for file in self.map.files() {
            files.push(FilePath::from(file.clone()));
        }

        Ok(files)
    }
}

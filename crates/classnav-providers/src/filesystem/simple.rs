//! Plain directory-walk file listing

use classnav_domain::error::Result;
use classnav_domain::ports::FileListProvider;
use classnav_domain::value_objects::FilePath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Lists `.php` files under a root directory by walking it
pub struct SimpleFilesystem {
    root: PathBuf,
}

impl SimpleFilesystem {
    /// Create a provider rooted at `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The root directory being listed
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl FileListProvider for SimpleFilesystem {
    fn file_list(&self) -> Result<Vec<FilePath>> {
        let files = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "php"))
            .map(|e| FilePath::from(e.into_path()))
            .collect();
        Ok(files)
    }
}

//! Git-tracked file listing

use classnav_domain::error::{Error, Result};
use classnav_domain::ports::FileListProvider;
use classnav_domain::value_objects::FilePath;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Lists `.php` files tracked by the git repository at a root directory
///
/// Shells out to `git ls-files`; a missing binary or a root that is not a
/// work tree surfaces as a `Process` fault, not an empty list.
pub struct GitFilesystem {
    root: PathBuf,
}

impl GitFilesystem {
    /// Create a provider rooted at `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl FileListProvider for GitFilesystem {
    fn file_list(&self) -> Result<Vec<FilePath>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .arg("ls-files")
            .output()
            .map_err(|e| Error::process(format!("failed to run git ls-files: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::process(format!(
                "git ls-files failed in '{}': {}",
                self.root.display(),
                stderr.trim()
            )));
        }

        let listing = String::from_utf8_lossy(&output.stdout);
        let files: Vec<FilePath> = listing
            .lines()
            .filter(|line| line.ends_with(".php"))
            .map(|line| FilePath::from(self.root.join(line)))
            .collect();
        debug!(root = %self.root.display(), files = files.len(), "git file listing");
        Ok(files)
    }
}

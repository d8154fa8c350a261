//! File→class strategy over a composer autoload map

use crate::composer::AutoloaderMap;
use classnav_domain::error::Result;
use classnav_domain::ports::FileToClass;
use classnav_domain::value_objects::{ClassName, FilePath};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Derives class names from file paths through one autoload map
///
/// PSR-4 derivation is preferred (it yields the fully-qualified name); a
/// file only reachable through a classmap entry falls back to its stem as a
/// top-level class name. Relative query paths are retried against the map's
/// project root.
pub struct ComposerFileToClass {
    map: Arc<AutoloaderMap>,
}

impl ComposerFileToClass {
    /// Build a strategy over a loaded map
    pub fn new(map: Arc<AutoloaderMap>) -> Self {
        Self { map }
    }

    fn psr4_class(&self, path: &Path) -> Option<ClassName> {
        let mut best: Option<(usize, ClassName)> = None;
        for entry in self.map.psr4() {
            for dir in &entry.dirs {
                let Some(relative) = strip_dir(dir, path, self.map.root()) else {
                    continue;
                };
                if relative.extension().and_then(|e| e.to_str()) != Some("php") {
                    continue;
                }
                let stem_path = relative.with_extension("");
                let segments: Vec<String> = stem_path
                    .iter()
                    .filter_map(|s| s.to_str().map(str::to_owned))
                    .collect();
                if segments.is_empty() {
                    continue;
                }
                let class = ClassName::new(format!("{}{}", entry.prefix, segments.join("\\")));
                let specificity = dir.as_os_str().len();
                if best.as_ref().is_none_or(|(len, _)| specificity > *len) {
                    best = Some((specificity, class));
                }
            }
        }
        best.map(|(_, class)| class)
    }

    fn classmap_class(&self, path: &Path) -> Option<ClassName> {
        let root = self.map.root();
        self.map
            .classmap_files()
            .iter()
            .find(|file| paths_match(file, path, root))
            .and_then(|file| file.file_stem())
            .and_then(|stem| stem.to_str())
            .map(ClassName::new)
    }
}

impl FileToClass for ComposerFileToClass {
    fn file_to_class(&self, path: &FilePath) -> Result<Option<ClassName>> {
        let path = path.as_path();
        Ok(self.psr4_class(path).or_else(|| self.classmap_class(path)))
    }
}

fn strip_dir(dir: &Path, path: &Path, root: &Path) -> Option<PathBuf> {
    if let Ok(relative) = path.strip_prefix(dir) {
        return Some(relative.to_path_buf());
    }
    if path.is_relative() {
        if let Ok(relative) = root.join(path).strip_prefix(dir) {
            return Some(relative.to_path_buf());
        }
    }
    None
}

fn paths_match(known: &Path, query: &Path, root: &Path) -> bool {
    known == query || (query.is_relative() && known == root.join(query))
}

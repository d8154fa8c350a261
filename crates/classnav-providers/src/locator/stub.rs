//! Stub directory source locator

use classnav_domain::error::Result;
use classnav_domain::ports::SourceLocator;
use classnav_domain::value_objects::{ClassName, FilePath, SourceCode};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const INDEX_FILE: &str = "stub-index.json";

/// Locates classes in a directory of stub signature files
///
/// Stubs are indexed by file stem (one class per stub file). The index is
/// built lazily on first use and persisted under the cache directory so
/// later runs skip the walk; a stale or unreadable cache is rebuilt. A
/// missing stub directory means "no stubs installed" and yields no matches.
pub struct StubSourceLocator {
    stub_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    index: OnceCell<HashMap<String, PathBuf>>,
}

impl StubSourceLocator {
    /// Create a locator over `stub_dir`, caching its index under `cache_dir`
    ///
    /// No stub directory configured means no stubs: the locator stays
    /// registered but never matches.
    pub fn new(stub_dir: Option<PathBuf>, cache_dir: Option<PathBuf>) -> Self {
        Self {
            stub_dir,
            cache_dir,
            index: OnceCell::new(),
        }
    }

    fn index(&self) -> &HashMap<String, PathBuf> {
        self.index.get_or_init(|| {
            let Some(stub_dir) = &self.stub_dir else {
                return HashMap::new();
            };
            if let Some(cached) = self.load_cached_index() {
                return cached;
            }
            let index = build_index(stub_dir);
            self.store_index(&index);
            index
        })
    }

    fn cache_file(&self) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join(INDEX_FILE))
    }

    fn load_cached_index(&self) -> Option<HashMap<String, PathBuf>> {
        let cache_file = self.cache_file()?;
        let raw = std::fs::read(&cache_file).ok()?;
        match serde_json::from_slice(&raw) {
            Ok(index) => {
                debug!(cache = %cache_file.display(), "loaded stub index from cache");
                Some(index)
            }
            Err(e) => {
                debug!(cache = %cache_file.display(), error = %e, "discarding stale stub index");
                None
            }
        }
    }

    fn store_index(&self, index: &HashMap<String, PathBuf>) {
        let Some(cache_file) = self.cache_file() else {
            return;
        };
        let write = || -> std::io::Result<()> {
            if let Some(parent) = cache_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let raw = serde_json::to_vec(index).map_err(std::io::Error::other)?;
            std::fs::write(&cache_file, raw)
        };
        if let Err(e) = write() {
            debug!(cache = %cache_file.display(), error = %e, "could not persist stub index");
        }
    }
}

impl SourceLocator for StubSourceLocator {
    fn locate(&self, class: &ClassName) -> Result<Option<SourceCode>> {
        let Some(path) = self.index().get(class.short_name()) else {
            return Ok(None);
        };
        let code = std::fs::read_to_string(path)?;
        Ok(Some(SourceCode::with_path(
            FilePath::from(path.clone()),
            code,
        )))
    }
}

fn build_index(stub_dir: &Path) -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();
    if !stub_dir.is_dir() {
        debug!(dir = %stub_dir.display(), "stub directory missing, empty index");
        return index;
    }
    for entry in WalkDir::new(stub_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "php"))
    {
        if let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) {
            // first stub wins on stem collisions
            index
                .entry(stem.to_string())
                .or_insert_with(|| entry.path().to_path_buf());
        }
    }
    debug!(dir = %stub_dir.display(), stubs = index.len(), "built stub index");
    index
}

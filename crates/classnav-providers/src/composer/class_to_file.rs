//! Class→file strategy over a composer autoload map

use crate::composer::AutoloaderMap;
use classnav_domain::error::Result;
use classnav_domain::ports::ClassToFile;
use classnav_domain::value_objects::{ClassName, FilePath};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolves class names through one autoload map
///
/// Classmap entries take precedence over PSR-4 derivation, matching
/// composer's own lookup order. Among several candidates, an existing file
/// wins over a merely derivable one.
pub struct ComposerClassToFile {
    map: Arc<AutoloaderMap>,
}

impl ComposerClassToFile {
    /// Build a strategy over a loaded map
    pub fn new(map: Arc<AutoloaderMap>) -> Self {
        Self { map }
    }
}

impl ClassToFile for ComposerClassToFile {
    fn class_to_file(&self, class: &ClassName) -> Result<Option<FilePath>> {
        let candidates = candidates(&self.map, class);
        let best = candidates
            .iter()
            .find(|c| c.exists())
            .cloned()
            .or_else(|| candidates.into_iter().next());
        Ok(best.map(FilePath::from))
    }
}

/// All file candidates a map offers for a class, best first
///
/// Also used by the global autoload hooks, which answer from whole maps
/// rather than from a single strategy instance.
pub fn candidates(map: &AutoloaderMap, class: &ClassName) -> Vec<PathBuf> {
    let mut out = Vec::new();

    // classmap: a directly-listed file whose stem equals the short name
    let short = class.short_name();
    for file in map.classmap_files() {
        if file.file_stem().and_then(|s| s.to_str()) == Some(short) {
            out.push(file.clone());
        }
    }

    // PSR-4: longest matching prefix, one candidate per base directory
    for entry in map.psr4() {
        if !class.has_prefix(&entry.prefix) {
            continue;
        }
        let remainder = &class.as_str()[entry.prefix.len()..];
        if remainder.is_empty() {
            continue;
        }
        let relative: PathBuf = remainder.split('\\').collect();
        for dir in &entry.dirs {
            out.push(dir.join(relative.with_extension("php")));
        }
        // entries are sorted longest-prefix-first; the first hit is the
        // most specific mapping
        break;
    }

    out
}

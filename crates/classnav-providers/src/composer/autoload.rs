//! Composer autoload map
//!
//! Parses the `autoload` / `autoload-dev` sections of a `composer.json`
//! manifest into a queryable map: PSR-4 prefix table, expanded classmap
//! file list, and bootstrap files. PSR-0 sections are ignored.

use classnav_domain::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const MANIFEST_FILE: &str = "composer.json";

/// One PSR-4 prefix with its base directories, in manifest order
#[derive(Debug, Clone)]
pub struct Psr4Entry {
    /// Namespace prefix, normalized to end with a separator (`Animals\`)
    pub prefix: String,
    /// Base directories, absolute
    pub dirs: Vec<PathBuf>,
}

/// A loaded composer autoload map
///
/// The container treats this as an opaque capability object; only the
/// composer strategies in this module interpret its contents.
#[derive(Debug)]
pub struct AutoloaderMap {
    name: String,
    root: PathBuf,
    psr4: Vec<Psr4Entry>,
    classmap_files: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    autoload: Option<AutoloadSection>,
    #[serde(rename = "autoload-dev", default)]
    autoload_dev: Option<AutoloadSection>,
}

#[derive(Deserialize, Default)]
struct AutoloadSection {
    #[serde(rename = "psr-4", default)]
    psr4: BTreeMap<String, DirsValue>,
    #[serde(default)]
    classmap: Vec<String>,
    #[serde(default)]
    files: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DirsValue {
    One(String),
    Many(Vec<String>),
}

impl DirsValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(dir) => vec![dir],
            Self::Many(dirs) => dirs,
        }
    }
}

impl AutoloaderMap {
    /// Load an autoload map from a manifest path
    ///
    /// `path` may be the `composer.json` file itself or the project
    /// directory containing it. Fails with `AutoloaderNotFound` when the
    /// path (or the manifest inside the directory) does not exist, and with
    /// `InvalidAutoloader` when the manifest does not satisfy the autoloader
    /// shape: a JSON object carrying an `autoload` or `autoload-dev` section.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::AutoloaderNotFound {
                path: path.to_path_buf(),
            });
        }

        let manifest_path = if path.is_dir() {
            path.join(MANIFEST_FILE)
        } else {
            path.to_path_buf()
        };
        if !manifest_path.exists() {
            return Err(Error::AutoloaderNotFound {
                path: manifest_path,
            });
        }

        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let raw = std::fs::read_to_string(&manifest_path)?;
        let manifest: Manifest = serde_json::from_str(&raw)
            .map_err(|e| Error::invalid_autoloader(&manifest_path, e.to_string()))?;

        if manifest.autoload.is_none() && manifest.autoload_dev.is_none() {
            return Err(Error::invalid_autoloader(
                &manifest_path,
                "manifest carries no autoload section",
            ));
        }

        let mut psr4 = Vec::new();
        let mut classmap_files = Vec::new();
        let mut files = Vec::new();
        for section in [manifest.autoload, manifest.autoload_dev]
            .into_iter()
            .flatten()
        {
            for (prefix, dirs) in section.psr4 {
                psr4.push(Psr4Entry {
                    prefix: normalize_prefix(prefix),
                    dirs: dirs
                        .into_vec()
                        .into_iter()
                        .map(|dir| root.join(dir))
                        .collect(),
                });
            }
            for entry in section.classmap {
                expand_classmap_entry(&root.join(entry), &mut classmap_files);
            }
            for entry in section.files {
                files.push(root.join(entry));
            }
        }

        // Longest prefix first, so the most specific namespace mapping wins
        psr4.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));

        debug!(
            manifest = %manifest_path.display(),
            prefixes = psr4.len(),
            classmap = classmap_files.len(),
            "loaded autoload map"
        );

        Ok(Self {
            name: manifest_path.display().to_string(),
            root,
            psr4,
            classmap_files,
            files,
        })
    }

    /// Identity of this map (the manifest path it was loaded from)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// PSR-4 entries, longest prefix first
    pub fn psr4(&self) -> &[Psr4Entry] {
        &self.psr4
    }

    /// Files contributed by classmap sections, expanded at load time
    pub fn classmap_files(&self) -> &[PathBuf] {
        &self.classmap_files
    }

    /// Files contributed by `files` sections
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

fn normalize_prefix(prefix: String) -> String {
    if prefix.is_empty() || prefix.ends_with('\\') {
        prefix
    } else {
        format!("{prefix}\\")
    }
}

fn expand_classmap_entry(entry: &Path, out: &mut Vec<PathBuf>) {
    if entry.is_file() {
        out.push(entry.to_path_buf());
    } else if entry.is_dir() {
        for file in WalkDir::new(entry)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "php"))
        {
            out.push(file.into_path());
        }
    } else {
        debug!(entry = %entry.display(), "skipping missing classmap entry");
    }
}

//! Configuration data types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Working directory every relative path is resolved against
    pub cwd: String,

    /// Autoloader manifest paths, in priority order
    pub autoload: Vec<String>,

    /// Directory of stub signature files consulted before project sources
    pub stub_dir: Option<String>,

    /// Cache directory (stub index persistence)
    pub cache_dir: Option<String>,

    /// Console output settings
    pub console: ConsoleConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Console output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Dumper used when a command gets no `--format`
    pub default_dumper: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cwd: ".".to_string(),
            autoload: vec!["composer.json".to_string()],
            stub_dir: None,
            cache_dir: default_cache_dir(),
            console: ConsoleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_dumper: "indented".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// The working directory as a path, `~` expanded
    pub fn cwd(&self) -> PathBuf {
        expand(&self.cwd)
    }

    /// Autoloader manifest paths, expanded and anchored at the working
    /// directory when relative
    pub fn autoload_paths(&self) -> Vec<PathBuf> {
        self.autoload
            .iter()
            .map(|raw| self.anchored(raw))
            .collect()
    }

    /// The stub directory, if configured
    pub fn stub_dir(&self) -> Option<PathBuf> {
        self.stub_dir.as_deref().map(|raw| self.anchored(raw))
    }

    /// The cache directory, if available
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.as_deref().map(|raw| self.anchored(raw))
    }

    fn anchored(&self, raw: &str) -> PathBuf {
        let expanded = expand(raw);
        if expanded.is_absolute() {
            expanded
        } else {
            self.cwd().join(expanded)
        }
    }
}

fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn default_cache_dir() -> Option<String> {
    dirs::cache_dir().map(|dir| dir.join("classnav").display().to_string())
}

//! Configuration loader
//!
//! Merges configuration from defaults, an optional `classnav.toml` file and
//! `CLASSNAV_*` environment variables (later sources override earlier).

use crate::config::AppConfig;
use crate::logging::parse_log_level;
use classnav_domain::error::{Error, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = "classnav.toml";
const ENV_PREFIX: &str = "CLASSNAV";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader with default file discovery
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Merge order, later overrides earlier:
    /// 1. `AppConfig::default()`
    /// 2. TOML file (explicit path, else the first discovered candidate)
    /// 3. `CLASSNAV_*` environment variables (`__` separates nested keys,
    ///    e.g. `CLASSNAV_CONSOLE__DEFAULT_DUMPER`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = self.config_file() {
            debug!(path = %config_path.display(), "merging configuration file");
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed(&format!("{ENV_PREFIX}_")).split("__"));

        let config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        validate(&config)?;
        Ok(config)
    }

    fn config_file(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.config_path {
            return Some(explicit.clone());
        }
        Self::discover_config_file()
    }

    /// First existing config file among the conventional locations
    fn discover_config_file() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = std::env::current_dir() {
            candidates.push(current_dir.join(CONFIG_FILENAME));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("classnav").join(CONFIG_FILENAME));
        }
        candidates.into_iter().find(|path| path.exists())
    }
}

fn validate(config: &AppConfig) -> Result<()> {
    if config.autoload.is_empty() {
        return Err(Error::config("at least one autoload path is required"));
    }
    if config.console.default_dumper.is_empty() {
        return Err(Error::config("default dumper name cannot be empty"));
    }
    parse_log_level(&config.logging.level)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_autoload_list() {
        let config = AppConfig {
            autoload: Vec::new(),
            ..AppConfig::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(validate(&config).is_err());
    }
}

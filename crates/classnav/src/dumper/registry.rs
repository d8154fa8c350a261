//! Dumper registry

use super::Dumper;
use classnav_domain::error::{Error, Result};
use std::sync::Arc;

/// Dumpers keyed by format name, with a configured default
///
/// Built from the `console.dumper` tag index at wiring time; the `name`
/// attribute of each registration is the lookup key.
pub struct DumperRegistry {
    dumpers: Vec<(String, Arc<dyn Dumper>)>,
    default: String,
}

impl DumperRegistry {
    /// Build a registry from named dumpers and the default format name
    pub fn new(dumpers: Vec<(String, Arc<dyn Dumper>)>, default: String) -> Self {
        Self { dumpers, default }
    }

    /// The dumper for `format`, or the default one when `format` is `None`
    ///
    /// An unknown name is a configuration error and reports the available
    /// formats.
    pub fn get(&self, format: Option<&str>) -> Result<Arc<dyn Dumper>> {
        let name = format.unwrap_or(&self.default);
        self.dumpers
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, dumper)| dumper.clone())
            .ok_or_else(|| {
                let available: Vec<&str> =
                    self.dumpers.iter().map(|(name, _)| name.as_str()).collect();
                Error::config(format!(
                    "unknown dumper '{name}'. Available dumpers: {available:?}"
                ))
            })
    }

    /// Registered format names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.dumpers.iter().map(|(name, _)| name.as_str()).collect()
    }
}

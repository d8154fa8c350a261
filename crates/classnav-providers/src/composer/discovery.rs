//! Autoloader discovery
//!
//! Loads the autoload maps named by configuration. While maps are loading,
//! the global hook list holds only the maps loaded so far; the prior list is
//! reinstated before `discover` returns, whether it returns maps or an
//! error.

use crate::composer::hooks::{AutoloadHook, IsolationGuard};
use crate::composer::AutoloaderMap;
use classnav_domain::error::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Load one autoload map per path, in input order
///
/// Fails with `AutoloaderNotFound` for a missing path and
/// `InvalidAutoloader` for a manifest that does not satisfy the autoloader
/// shape; the first failing path aborts discovery. The global hook list is
/// isolated for the duration of the call and restored on every exit path.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<Arc<AutoloaderMap>>> {
    let _guard = IsolationGuard::isolate();

    let mut maps = Vec::with_capacity(paths.len());
    for path in paths {
        let map = Arc::new(AutoloaderMap::load(path)?);
        debug!(map = map.name(), "discovered autoload map");
        crate::composer::hooks::register(AutoloadHook::new(map.clone()));
        maps.push(map);
    }

    Ok(maps)
}

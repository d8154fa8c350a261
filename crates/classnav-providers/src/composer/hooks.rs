//! Process-global autoload hook list
//!
//! Models the host environment's class-resolution hook stack: an ordered,
//! process-wide list of autoload hooks consulted first-registered-first.
//! Discovery must not let unrelated hooks observe the maps it is loading,
//! so it isolates the list through [`IsolationGuard`]: snapshot and clear on
//! acquisition, restore the exact prior content and order on drop — on every
//! exit path, including faults.

use crate::composer::AutoloaderMap;
use classnav_domain::value_objects::{ClassName, FilePath};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError};

/// One registered autoload hook
///
/// A hook wraps a loaded map and answers class→file queries from it.
#[derive(Clone)]
pub struct AutoloadHook {
    map: Arc<AutoloaderMap>,
}

impl AutoloadHook {
    /// Wrap a loaded map as a hook
    pub fn new(map: Arc<AutoloaderMap>) -> Self {
        Self { map }
    }

    /// Hook identity (the manifest path of the underlying map)
    pub fn name(&self) -> &str {
        self.map.name()
    }

    /// Resolve a class through this hook's map
    pub fn resolve(&self, class: &ClassName) -> Option<FilePath> {
        crate::composer::class_to_file::candidates(&self.map, class)
            .into_iter()
            .next()
            .map(FilePath::from)
    }
}

static HOOKS: Lazy<Mutex<Vec<AutoloadHook>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn with_hooks<R>(f: impl FnOnce(&mut Vec<AutoloadHook>) -> R) -> R {
    let mut guard = HOOKS.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Append a hook to the global list
pub fn register(hook: AutoloadHook) {
    with_hooks(|hooks| hooks.push(hook));
}

/// Identities of the registered hooks, in registration order
pub fn registered_names() -> Vec<String> {
    with_hooks(|hooks| hooks.iter().map(|h| h.name().to_string()).collect())
}

/// Resolve a class through the global hook list, first hook wins
pub fn resolve_class(class: &ClassName) -> Option<FilePath> {
    with_hooks(|hooks| hooks.iter().find_map(|h| h.resolve(class)))
}

/// Scoped isolation of the global hook list
///
/// Construction snapshots the current list and clears it; dropping the
/// guard discards whatever was installed in between and reinstates the
/// snapshot.
pub struct IsolationGuard {
    saved: Vec<AutoloadHook>,
}

impl IsolationGuard {
    /// Snapshot and clear the global hook list
    pub fn isolate() -> Self {
        let saved = with_hooks(std::mem::take);
        Self { saved }
    }
}

impl Drop for IsolationGuard {
    fn drop(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        with_hooks(|hooks| *hooks = saved);
    }
}

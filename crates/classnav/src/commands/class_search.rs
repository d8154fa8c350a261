//! `class-search` command

use crate::console::services as console_services;
use crate::dumper::DumperRegistry;
use classnav_application::ClassSearch;
use classnav_infrastructure::bootstrap::services;
use classnav_infrastructure::di::Container;
use std::sync::Arc;

/// Search classes by short name and render the hits
pub fn run(container: &Container, name: &str, format: Option<&str>) -> anyhow::Result<()> {
    let search: Arc<ClassSearch> = container.resolve(services::CLASS_SEARCH)?;
    let results = search.search(name)?;

    let registry: Arc<DumperRegistry> = container.resolve(console_services::DUMPER_REGISTRY)?;
    let value = serde_json::to_value(&results)?;
    registry.get(format)?.dump(&mut std::io::stdout().lock(), &value)?;
    Ok(())
}

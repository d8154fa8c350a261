//! `config-dump` command

use crate::console::services as console_services;
use crate::dumper::DumperRegistry;
use classnav_infrastructure::di::Container;
use std::sync::Arc;

/// Render the effective configuration
pub fn run(container: &Container, format: Option<&str>) -> anyhow::Result<()> {
    let registry: Arc<DumperRegistry> = container.resolve(console_services::DUMPER_REGISTRY)?;
    let value = serde_json::to_value(container.config())?;
    registry.get(format)?.dump(&mut std::io::stdout().lock(), &value)?;
    Ok(())
}

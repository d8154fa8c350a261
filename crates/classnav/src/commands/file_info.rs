//! `file-info` command

use crate::console::services as console_services;
use crate::dumper::DumperRegistry;
use classnav_application::FileInfo;
use classnav_domain::value_objects::FilePath;
use classnav_infrastructure::bootstrap::services;
use classnav_infrastructure::di::Container;
use std::sync::Arc;

/// Describe a source file: existence and the class it maps to
pub fn run(container: &Container, path: &str, format: Option<&str>) -> anyhow::Result<()> {
    let file_info: Arc<FileInfo> = container.resolve(services::FILE_INFO)?;
    let report = file_info.for_file(FilePath::from(path))?;

    let registry: Arc<DumperRegistry> = container.resolve(console_services::DUMPER_REGISTRY)?;
    let value = serde_json::to_value(&report)?;
    registry.get(format)?.dump(&mut std::io::stdout().lock(), &value)?;
    Ok(())
}

//! Console wiring
//!
//! Registers the console-facing services on top of the core wiring: output
//! dumpers (tagged, keyed by format name), the dumper registry built from
//! that tag, and the interactive prompt chain.

use crate::dumper::{Dumper, DumperRegistry, IndentedDumper, JsonDumper, TableDumper};
use classnav_domain::chain::Chain;
use classnav_domain::error::{Error, Result};
use classnav_domain::ports::Prompt;
use classnav_infrastructure::bootstrap::{tags, Extension};
use classnav_infrastructure::di::{ContainerBuilder, Tag};
use classnav_providers::prompt::StdinPrompt;
use std::sync::Arc;

/// Console service ids
pub mod services {
    /// Dumper registry keyed by format name
    pub const DUMPER_REGISTRY: &str = "console.dumper_registry";
    /// Indented dumper
    pub const DUMPER_INDENTED: &str = "console.dumper.indented";
    /// JSON dumper
    pub const DUMPER_JSON: &str = "console.dumper.json";
    /// Table dumper
    pub const DUMPER_TABLE: &str = "console.dumper.table";
    /// First-match interactive prompt chain
    pub const PROMPTER: &str = "console.prompter";
}

/// Console wiring: dumpers, registry and prompter
pub struct ConsoleExtension;

impl Extension for ConsoleExtension {
    fn load(&self, builder: &mut ContainerBuilder) -> Result<()> {
        builder.register_tagged(
            services::DUMPER_INDENTED,
            vec![Tag::new(tags::DUMPER).with_attribute("name", "indented")],
            |_| Ok(Arc::new(IndentedDumper::new()) as Arc<dyn Dumper>),
        )?;

        builder.register_tagged(
            services::DUMPER_JSON,
            vec![Tag::new(tags::DUMPER).with_attribute("name", "json")],
            |_| Ok(Arc::new(JsonDumper::new()) as Arc<dyn Dumper>),
        )?;

        builder.register_tagged(
            services::DUMPER_TABLE,
            vec![Tag::new(tags::DUMPER).with_attribute("name", "table")],
            |_| Ok(Arc::new(TableDumper::new()) as Arc<dyn Dumper>),
        )?;

        builder.register(services::DUMPER_REGISTRY, |container| {
            let mut dumpers = Vec::new();
            for (id, attributes) in container.tagged(tags::DUMPER) {
                let name = attributes.get("name").cloned().ok_or_else(|| {
                    Error::config(format!("dumper '{id}' is missing a name attribute"))
                })?;
                dumpers.push((name, container.resolve::<Arc<dyn Dumper>>(id)?));
            }
            Ok(Arc::new(DumperRegistry::new(
                dumpers,
                container.config().console.default_dumper.clone(),
            )))
        })?;

        builder.register(services::PROMPTER, |_| {
            let members = vec![Arc::new(StdinPrompt::new()) as Arc<dyn Prompt>];
            Ok(Arc::new(Chain::new(members)))
        })?;

        Ok(())
    }
}

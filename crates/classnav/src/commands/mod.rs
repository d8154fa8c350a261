//! Console commands

pub mod class_search;
pub mod class_source;
pub mod config_dump;
pub mod file_info;

use clap::Subcommand;
use classnav_infrastructure::di::Container;

/// Subcommands of the `classnav` binary
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for classes by their unqualified name
    ClassSearch {
        /// Class short name, e.g. `Badger`
        name: String,
        /// Output format (indented, json, table)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show which class a source file defines
    FileInfo {
        /// Path to the source file
        path: String,
        /// Output format (indented, json, table)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the source code defining a class
    ClassSource {
        /// Fully-qualified class name, or a file path
        class: String,
    },
    /// Dump the effective configuration
    ConfigDump {
        /// Output format (indented, json, table)
        #[arg(long)]
        format: Option<String>,
    },
}

/// Dispatch a parsed subcommand against the wired container
pub fn dispatch(container: &Container, command: Command) -> anyhow::Result<()> {
    match command {
        Command::ClassSearch { name, format } => {
            class_search::run(container, &name, format.as_deref())
        }
        Command::FileInfo { path, format } => file_info::run(container, &path, format.as_deref()),
        Command::ClassSource { class } => class_source::run(container, &class),
        Command::ConfigDump { format } => config_dump::run(container, format.as_deref()),
    }
}

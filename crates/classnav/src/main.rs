//! classnav - Entry Point
//!
//! Parses the command line, loads configuration, wires the container from
//! the core and console extensions, and dispatches the subcommand.

use clap::Parser;
use classnav::commands::{self, Command};
use classnav::ConsoleExtension;
use classnav_infrastructure::bootstrap::{build_container, CoreExtension};
use classnav_infrastructure::config::ConfigLoader;
use classnav_infrastructure::logging::init_logging;

/// Command line interface for classnav
#[derive(Parser, Debug)]
#[command(name = "classnav")]
#[command(about = "Navigate PHP projects by class name")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Working directory (overrides the configured one)
    #[arg(long)]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(cwd) = cli.cwd {
        config.cwd = cwd;
    }

    init_logging(&config.logging)?;

    let container = build_container(config, &[&CoreExtension, &ConsoleExtension])?;
    tracing::debug!("container wired, dispatching command");
    commands::dispatch(&container, cli.command)
}

//! Configuration
//!
//! The parameter surface of the tool: a flat set of named values supplied
//! at process start, merged from defaults, an optional TOML file and
//! environment variables, then read-only for the life of the process.

pub mod data;
pub mod loader;

pub use data::{AppConfig, ConsoleConfig, LoggingConfig};
pub use loader::ConfigLoader;

//! Output dumpers
//!
//! A dumper renders a command's JSON report to the console. Dumpers are
//! registered under the `console.dumper` tag with a `name` attribute and
//! retrieved by format name through the [`DumperRegistry`].

pub mod indented;
pub mod json;
pub mod registry;
pub mod table;

use classnav_domain::error::Result;
use serde_json::Value;
use std::io::Write;

pub use indented::IndentedDumper;
pub use json::JsonDumper;
pub use registry::DumperRegistry;
pub use table::TableDumper;

/// Render a JSON report to a writer
pub trait Dumper: Send + Sync + std::fmt::Debug {
    /// Write `value` to `out` in this dumper's format
    fn dump(&self, out: &mut dyn Write, value: &Value) -> Result<()>;
}

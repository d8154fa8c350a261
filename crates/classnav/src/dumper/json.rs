//! JSON dumper

use super::Dumper;
use classnav_domain::error::Result;
use serde_json::Value;
use std::io::Write;

/// Pretty-printed JSON output
#[derive(Default, Debug)]
pub struct JsonDumper;

impl JsonDumper {
    /// Create the JSON dumper
    pub fn new() -> Self {
        Self
    }
}

impl Dumper for JsonDumper {
    fn dump(&self, out: &mut dyn Write, value: &Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

//! Indented key/value dumper

use super::Dumper;
use classnav_domain::error::Result;
use serde_json::Value;
use std::io::Write;

/// Human-oriented indented output, one `key: value` line per scalar
#[derive(Default, Debug)]
pub struct IndentedDumper;

impl IndentedDumper {
    /// Create the indented dumper
    pub fn new() -> Self {
        Self
    }

    fn dump_value(&self, out: &mut dyn Write, value: &Value, depth: usize) -> Result<()> {
        let pad = "  ".repeat(depth);
        match value {
            Value::Object(map) => {
                for (key, entry) in map {
                    if entry.is_object() || entry.is_array() {
                        writeln!(out, "{pad}{key}:")?;
                        self.dump_value(out, entry, depth + 1)?;
                    } else {
                        writeln!(out, "{pad}{key}: {}", scalar(entry))?;
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if item.is_object() || item.is_array() {
                        writeln!(out, "{pad}-")?;
                        self.dump_value(out, item, depth + 1)?;
                    } else {
                        writeln!(out, "{pad}- {}", scalar(item))?;
                    }
                }
            }
            scalar_value => writeln!(out, "{pad}{}", scalar(scalar_value))?,
        }
        Ok(())
    }
}

impl Dumper for IndentedDumper {
    fn dump(&self, out: &mut dyn Write, value: &Value) -> Result<()> {
        self.dump_value(out, value, 0)
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "~".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut out = Vec::new();
        IndentedDumper::new().dump(&mut out, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_nested_objects_with_indentation() {
        let rendered = render(&json!({
            "file": "src/Badger.php",
            "detail": { "exists": true }
        }));
        assert_eq!(rendered, "detail:\n  exists: true\nfile: src/Badger.php\n");
    }

    #[test]
    fn renders_arrays_as_list_items() {
        let rendered = render(&json!(["a.php", "b.php"]));
        assert_eq!(rendered, "- a.php\n- b.php\n");
    }
}

//! JSON output helpers for `dip config`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Indentation used for nested config values.
const INDENT: &[u8] = b"    ";

/// Render a config value the way `dip config` prints it.
///
/// Strings are printed raw; everything else is pretty JSON with four-space
/// indentation. `serde_json` maps are ordered, so keys come out sorted.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_value(value: &Value) -> Result<String> {
    if let Value::String(s) = value {
        return Ok(s.clone());
    }
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(value, &mut ser).context("JSON serialization failed")?;
    String::from_utf8(buf).context("JSON output is not UTF-8")
}

//! Common utilities for formatters.

use anyhow::Result;

/// Render a loosely typed JSON value as a table cell.
///
/// Strings lose their quotes, null becomes empty, arrays and objects are
/// compact JSON.
pub fn format_json_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::to_string(v).unwrap_or_default()
        }
    }
}

/// Print formatted output to stdout, ending with exactly one newline.
pub fn output_result(output: &str) -> Result<()> {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

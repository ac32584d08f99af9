pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Flatten one level of nesting into dotted keys. Underwriting outputs
/// nest at most one level (components, rate_breakdown, stage results),
/// which keeps two-column renderings readable.
pub fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut rows = Vec::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Object(inner) => {
                    for (ikey, ival) in inner {
                        rows.push((format!("{key}.{ikey}"), ival.clone()));
                    }
                }
                _ => rows.push((key.clone(), val.clone())),
            }
        }
    } else {
        rows.push(("value".to_string(), value.clone()));
    }
    rows
}

//! Cell text for the table renderer.
//!
//! Formatting never touches the stored value: truncation is a flag the
//! renderer turns into a CSS class.

use crate::config::{MISSING_CELL, TRUNCATE_AFTER_CHARS};
use crate::model::Row;
use serde_json::{Number, Value};

/// Rendered content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub text: String,
    /// Long string value; the renderer should clip it visually
    pub truncated: bool,
}

impl CellText {
    /// Cell for attribute `name` of `row`.
    pub fn of(row: &Row, name: &str) -> Self {
        let value = row.get(name);
        Self {
            text: format_value(value),
            truncated: is_long_text(value),
        }
    }
}

/// Display text for a cell value.
///
/// Missing or null values print as `-`, objects and arrays as compact JSON,
/// strings verbatim, everything else in its natural string form.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(nested @ (Value::Array(_) | Value::Object(_))) => nested.to_string(),
    }
}

/// Whether the value is a string long enough to be clipped.
pub fn is_long_text(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s.chars().count() > TRUNCATE_AFTER_CHARS)
}

// Below 1e21 the browser prints integral floats in plain decimal without a
// fractional part, so `5.0` from the server shows as `5`. f64's Display does
// the same over that whole range; only `-0` needs special casing.
const PLAIN_DECIMAL_LIMIT: f64 = 1e21;

fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < PLAIN_DECIMAL_LIMIT => {
            f.to_string()
        }
        _ => n.to_string(),
    }
}

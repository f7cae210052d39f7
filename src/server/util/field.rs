//! Presence checks for loosely typed JSON request fields.
//!
//! A field counts as absent when it is missing, `null`, an empty string, `"0"`, a numeric
//! zero, or anything other than a string or number.

use serde_json::Value;

/// Returns the field as text when it is present.
pub fn required(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() && s != "0" => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the field as a record ID when it is present and parses as one.
pub fn required_id(value: Option<&Value>) -> Option<i32> {
    let id: Option<i32> = match value? {
        Value::Number(n) => n.as_i64().and_then(|id| i32::try_from(id).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    id.filter(|id| *id != 0)
}

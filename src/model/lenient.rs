//! Tolerant deserializers for records written by older clients.
//!
//! Stored documents and request bodies are not always consistent about scalar types:
//! ids appear as numbers or strings, prices and totals appear as numeric strings, and
//! optional text is sometimes `null`. These helpers accept every such variant and
//! coerce it to the canonical Rust type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Renders a scalar JSON value as text.
///
/// Strings are returned as-is and numbers use their JSON representation. Every other
/// value yields `None`.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a JSON value as a finite number, parsing numeric strings.
pub fn value_to_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.filter(|n| n.is_finite())
}

/// Deserializes a string or number as text; anything else becomes an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value).unwrap_or_default())
}

/// Deserializes an optional string or number as text.
pub fn option_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

/// Deserializes a number or numeric string; missing or invalid values become `0.0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_number(&value).unwrap_or(0.0))
}

/// Deserializes an optional number or numeric string.
///
/// Unlike [`number`], a value that is present but not numeric is rejected so that
/// request validation can report it.
pub fn option_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => value_to_number(&other)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// Deserializes a list that may be `null`.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

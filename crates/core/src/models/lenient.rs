//! Serde helpers for backend numbers.
//!
//! The portfolio backend serializes database decimals with `default=str`,
//! so the same field can arrive as `12.5`, `"12.5"`, `null` or not at all.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_f64(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Number or numeric string; anything else becomes `0.0`.
pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_f64).unwrap_or(0.0))
}

/// Number or numeric string; null or unparseable becomes `None`.
pub(crate) fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_f64))
}

/// Non-negative integer, possibly sent as a string.
pub(crate) fn u32_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(value_to_f64)
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32)
        .unwrap_or(0))
}

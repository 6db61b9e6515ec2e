//! # Shared Utility Functions
//!
//! Lenient value conversion for the backend's string/number ambiguity, and a
//! character-safe excerpt helper for diagnostics.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use shared::utils::{excerpt, value_as_f64, value_as_text};
//!
//! assert_eq!(value_as_text(&json!(4)), Some("4".to_string()));
//! assert_eq!(value_as_f64(&json!("1,250.50")), Some(1250.5));
//! assert_eq!(excerpt("SELECT * FROM receipts", 6), "SELECT");
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Return at most `max_chars` characters from the start of `text`.
///
/// Slices on character boundaries so multi-byte text never panics.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Read a JSON value as non-empty text.
///
/// Strings are trimmed; numbers and booleans are rendered. `null`, empty strings,
/// arrays and objects yield `None`.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a JSON value as a finite number.
///
/// Accepts numbers and numeric strings (thousands separators are ignored).
/// Anything else yields `None`.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Interpret the backend's success flag.
///
/// The flag is documented as a boolean but older deployments send `1`/`0` or
/// `"true"`/`"false"`. `null` counts as false.
pub fn value_as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serde helper: accept a string, number or bool and keep it as text.
pub fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_text))
}

/// Serde helper: read the success flag through [`value_as_flag`].
pub fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_flag(&value))
}

//! Reusable field filters
//!
//! These filters transform draft field values before validation

use serde_json::Value;

/// Filter: trim whitespace from strings, including strings inside arrays
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Value::String(s.trim().to_string()),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

/// Filter: drop blank strings from string arrays
///
/// A form that splits "99213, , 90471" on commas leaves empty entries behind.
pub fn drop_blank_items() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| item.as_str().is_none_or(|s| !s.trim().is_empty()))
                .collect(),
        ),
        other => other,
    }
}

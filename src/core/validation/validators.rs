//! Reusable field validators
//!
//! These validators are applied to draft fields before a record is built

use serde_json::Value;

/// Validator: field is required (present, not null, not blank)
///
/// Blank strings and empty arrays count as missing, the way an empty form
/// input does. Numbers and booleans are always present, including `0` and
/// `false`.
pub fn required() -> impl Fn(&str, Option<&Value>) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: Option<&Value>| {
        let empty = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        };
        if empty {
            Err(format!("Field '{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: value must be in allowed list
pub fn in_list(
    allowed: &'static [&'static str],
) -> impl Fn(&str, Option<&Value>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: Option<&Value>| match value.and_then(Value::as_str) {
        Some(s) if !allowed.contains(&s) => Err(format!(
            "'{}' must be one of {:?} (got: {})",
            field, allowed, s
        )),
        _ => Ok(()),
    }
}

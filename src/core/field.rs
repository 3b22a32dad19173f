//! Field value types and search matching

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A polymorphic field value as stored in an entity slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<String>),
    Null,
}

impl FieldValue {
    /// Convert a JSON value into a field value.
    ///
    /// Objects and arrays that are not made of strings have no field
    /// representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Null => Some(FieldValue::Null),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::List),
            Value::Object(_) => None,
        }
    }

    /// Case-insensitive substring match.
    ///
    /// `needle` must already be lowercased. Only text values take part in
    /// search; a list matches when any of its items does.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(needle),
            FieldValue::List(items) => items.iter().any(|s| s.to_lowercase().contains(needle)),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

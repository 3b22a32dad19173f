//! Drafts: partially filled records submitted by creation forms

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A partially filled record, keyed by camelCase field name.
///
/// Drafts are loosely typed on purpose: a form may omit optional fields or
/// send amounts as text. The store validates a draft against the entity
/// schema before turning it into a typed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(Map<String, Value>);

impl Draft {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a draft from a JSON object
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::Malformed {
                entity_type: "draft".to_string(),
                message: format!("expected a JSON object, got {}", other),
            }),
        }
    }

    /// Build a draft holding every field of an existing record
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, ValidationError> {
        let value = serde_json::to_value(record).map_err(|e| ValidationError::Malformed {
            entity_type: "draft".to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(value)
    }

    /// Builder-style setter
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field is absent, null or a blank string
    pub fn is_blank(&self, field: &str) -> bool {
        match self.0.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        }
    }

    /// Transform every field value in place
    pub fn map_values(self, f: impl Fn(&str, Value) -> Value) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(field, value)| {
                    let mapped = f(&field, value);
                    (field, mapped)
                })
                .collect(),
        )
    }

    /// Drop null fields so that record defaults apply to them
    pub fn without_nulls(mut self) -> Self {
        self.0.retain(|_, value| !value.is_null());
        self
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Draft {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

//! Entity traits defining the core abstraction for all record types

use crate::core::draft::Draft;
use crate::core::field::FieldValue;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Static description of one entity type.
///
/// The store is implemented once and driven entirely by this table plus
/// the [`Record`] hooks.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Singular type name used in logs and errors (e.g. "claim")
    pub entity_type: &'static str,

    /// Key of the storage slot holding the JSON array (e.g. "rcm_claims")
    pub storage_key: &'static str,

    /// Draft fields that must be present and non-empty on create
    pub required_fields: &'static [&'static str],

    /// Fields matched by [`EntityStore::search`](crate::core::store::EntityStore::search).
    /// Names may be virtual fields resolved by [`Record::field_value`].
    pub search_fields: &'static [&'static str],

    /// Closed enumerations: field name and its allowed values
    pub enum_fields: &'static [(&'static str, &'static [&'static str])],
}

/// Base trait for all records held in an entity store.
///
/// Every record has:
/// - id: unique within its collection, assigned at creation
/// - createdAt: creation date, never mutated
///
/// Records are serialized with camelCase field names so that a stored slot
/// is a plain JSON array of objects.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    const SCHEMA: EntitySchema;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Get the creation date
    fn created_at(&self) -> NaiveDate;

    /// The fixed demo collection written on first load
    fn seed() -> Vec<Self> {
        Vec::new()
    }

    /// Entity-specific create hook: fill defaults and derived fields.
    ///
    /// Runs after validation, with the collection as it stands before the
    /// new record is appended.
    fn prepare_draft(_draft: &mut Draft, _existing: &[Self]) {}

    /// Get the value of a specific field by its camelCase name
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        serialized_field(self, field)
    }

    /// Case-insensitive substring match over the schema's search fields.
    ///
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        Self::SCHEMA.search_fields.iter().any(|field| {
            self.field_value(field)
                .is_some_and(|value| value.contains_lowercase(needle))
        })
    }
}

/// Look a field up in the serialized form of `record`
pub fn serialized_field<T: Serialize>(record: &T, field: &str) -> Option<FieldValue> {
    serde_json::to_value(record)
        .ok()?
        .get(field)
        .and_then(FieldValue::from_json)
}

/// Trait for records with a closed-enumeration status field.
///
/// Some transitions stamp a date field with the day they happen (a claim
/// moving to Submitted gets `submittedAt`); those pairs live in
/// [`Stateful::STATUS_STAMPS`].
pub trait Stateful: Record {
    type Status: Copy + PartialEq + Debug + Serialize + Send + Sync + 'static;

    /// Name of the status field in the serialized record
    const STATUS_FIELD: &'static str = "status";

    /// (status, date field) pairs stamped when the status is entered
    const STATUS_STAMPS: &'static [(Self::Status, &'static str)] = &[];

    /// Get the current status
    fn status(&self) -> Self::Status;

    /// Date fields to stamp when moving to `status`
    fn stamps_for(status: Self::Status) -> Vec<&'static str> {
        Self::STATUS_STAMPS
            .iter()
            .filter(|(s, _)| *s == status)
            .map(|(_, field)| *field)
            .collect()
    }
}

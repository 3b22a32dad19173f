//! Validation and filtering of drafts
//!
//! A draft is filtered (trimmed) first, then checked against the entity's
//! schema: every required field must be present and non-empty, and every
//! closed-enumeration field that is present must hold an allowed value.

pub mod filters;
pub mod validators;

use crate::core::draft::Draft;
use crate::core::entity::EntitySchema;
use crate::core::error::ValidationError;

/// Apply the standard draft filters to every field, then drop nulls
pub fn normalize(draft: Draft) -> Draft {
    let trim = filters::trim();
    let drop_blank = filters::drop_blank_items();
    draft
        .map_values(|field, value| drop_blank(field, trim(field, value)))
        .without_nulls()
}

/// Check a normalized draft against a schema.
///
/// All missing fields are reported together, in schema order.
pub fn validate_draft(schema: &EntitySchema, draft: &Draft) -> Result<(), ValidationError> {
    let required = validators::required();
    let missing: Vec<String> = schema
        .required_fields
        .iter()
        .filter(|field| required(field, draft.get(field)).is_err())
        .map(|field| field.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            entity_type: schema.entity_type.to_string(),
            fields: missing,
        });
    }

    for &(field, allowed) in schema.enum_fields {
        validators::in_list(allowed)(field, draft.get(field)).map_err(|message| {
            ValidationError::Malformed {
                entity_type: schema.entity_type.to_string(),
                message,
            }
        })?;
    }

    Ok(())
}

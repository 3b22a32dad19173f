//! Typed error handling for the entity stores
//!
//! Callers can match on the specific failure instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a draft or replacement collection was rejected
//! - [`StoreError::NotFound`]: an operation referenced an unknown id
//! - [`StoreError::Storage`]: the key-value backend failed
//! - [`StoreError::Corrupt`]: a stored slot does not decode
//!
//! # Example
//!
//! ```rust,ignore
//! match claims.create(draft) {
//!     Ok(claim) => println!("created {}", claim.claim_number),
//!     Err(StoreError::Validation(e)) => eprintln!("Please fill in required fields: {}", e),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

/// The main error type returned by [`EntityStore`](crate::core::store::EntityStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// Draft failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with that id exists in the collection
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },

    /// The persisted slot could not be decoded
    #[error("stored collection '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl StoreError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Validation(e) => e.error_code(),
            StoreError::NotFound { .. } => "ENTITY_NOT_FOUND",
            StoreError::Corrupt { .. } => "STORAGE_CORRUPT",
            StoreError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn not_found(entity_type: &str, id: &str) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required fields are missing or empty
    #[error("{entity_type}: missing required field(s): {}", fields.join(", "))]
    MissingFields {
        entity_type: String,
        fields: Vec<String>,
    },

    /// The draft has every required field but cannot form a record
    #[error("{entity_type}: {message}")]
    Malformed {
        entity_type: String,
        message: String,
    },

    /// A replacement collection carries the same id twice
    #[error("{entity_type}: duplicate id '{id}'")]
    DuplicateId { entity_type: String, id: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "MISSING_REQUIRED_FIELDS",
            ValidationError::Malformed { .. } => "MALFORMED_DRAFT",
            ValidationError::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }

    /// Names of the missing fields, empty for other validation failures
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ValidationError::MissingFields { fields, .. } => fields,
            _ => &[],
        }
    }
}

//! Core module containing fundamental traits and types for the stores

pub mod clock;
pub mod confirm;
pub mod draft;
pub mod entity;
pub mod error;
pub mod field;
pub mod service;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, IdGenerator, SystemClock};
pub use confirm::{AlwaysConfirm, Confirm, ConfirmPrompt, Deletion, NeverConfirm};
pub use draft::Draft;
pub use entity::{EntitySchema, Record, Stateful};
pub use error::{StoreError, ValidationError};
pub use field::FieldValue;
pub use service::Storage;
pub use store::EntityStore;

//! Shared test harness for entity stores and storage backends
//!
//! Provides a fixed clock, store constructors over in-memory storage and
//! assertion helpers, plus two macro-generated suites:
//!
//! - `entity_store_tests!` runs the `EntityStore<T>` contract for one record type
//! - `storage_tests!` runs the `Storage` contract for one backend
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod entity_store_tests;
#[macro_use]
mod storage_tests;

use chrono::NaiveDate;
use rcm::core::{Clock, EntityStore, FixedClock, Record, Storage, StoreError, ValidationError};
use rcm::storage::InMemoryStorage;
use serde_json::Value;
use std::sync::Arc;

/// The date every harness clock is pinned to
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
}

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(today()))
}

/// A store over fresh in-memory storage, with the record's demo seed
pub fn memory_store<T: Record>() -> (InMemoryStorage, EntityStore<T>) {
    let storage = InMemoryStorage::new();
    let store = EntityStore::new(Arc::new(storage.clone())).with_clock(fixed_clock());
    (storage, store)
}

/// A store over fresh in-memory storage seeded with `seed`
pub fn seeded_store<T: Record>(seed: Vec<T>) -> (InMemoryStorage, EntityStore<T>) {
    let (storage, store) = memory_store();
    (storage, store.with_seed(seed))
}

/// Unwrap the validation error of a rejected draft
pub fn validation_error(err: StoreError) -> ValidationError {
    match err {
        StoreError::Validation(e) => e,
        other => panic!("Expected StoreError::Validation, got {:?}", other),
    }
}

/// Field names a rejected draft was missing
pub fn missing_fields(err: StoreError) -> Vec<String> {
    validation_error(err).missing_fields().to_vec()
}

/// The slot under `key` parsed as a JSON array
pub fn stored_array(storage: &dyn Storage, key: &str) -> Vec<Value> {
    let raw = storage
        .get(key)
        .unwrap()
        .unwrap_or_else(|| panic!("slot {} is empty", key));
    match serde_json::from_str(&raw).unwrap() {
        Value::Array(items) => items,
        other => panic!("slot {} is not an array: {}", key, other),
    }
}

pub fn ids<T: Record>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

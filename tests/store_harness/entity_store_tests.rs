//! Macro-generated test suite for the `EntityStore<T>` contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! entity_store_tests!(claims, Claim, {
//!     count: 3,
//!     valid: Draft::new()
//!         .with("patientName", "Ann Lee")
//!         .with("serviceDate", "2024-01-20")
//!         .with("totalAmount", "120"),
//!     missing: "patientName",
//!     search: "aetna" => 1,
//! });
//! ```
//!
//! # Generated Tests
//!
//! ## Load
//! - `test_first_load_writes_seed`: empty slot is seeded and persisted
//! - `test_persisted_as_json_array`: slot holds one array element per record
//!
//! ## Create
//! - `test_create_valid_draft`: appended with a fresh id and today's date,
//!   and the returned record equals the stored one
//! - `test_create_rejects_blank_required_field`: names the field, store unchanged
//! - `test_create_rejects_empty_draft`: lists every required field in order
//!
//! ## Update / Delete
//! - `test_update_replaces_in_place`: same position, id and createdAt kept
//! - `test_update_unknown_id`: NotFound, store unchanged
//! - `test_delete_existing` / `test_delete_unknown_id`
//! - `test_delete_confirmed_cancelled` / `test_delete_confirmed_accepted`
//!
//! ## Search
//! - `test_search_term`: expected hits, case-insensitive
//! - `test_search_blank_term` / `test_search_no_match`
//!
//! ## Reset
//! - `test_reset_reseeds`

macro_rules! entity_store_tests {
    ($name:ident, $record:ty, {
        count: $count:expr,
        valid: $valid:expr,
        missing: $missing:expr,
        search: $term:expr => $hits:expr $(,)?
    }) => {
        mod $name {
            use super::*;
            use rcm::core::{Deletion, Draft, NeverConfirm, AlwaysConfirm, Record, Storage};

            fn schema() -> rcm::core::EntitySchema {
                <$record as Record>::SCHEMA
            }

            fn valid_draft() -> Draft {
                $valid
            }

            // ==================================================================
            // Load
            // ==================================================================

            #[test]
            fn test_first_load_writes_seed() {
                let (storage, store) = memory_store::<$record>();
                assert!(storage.get(schema().storage_key).unwrap().is_none());

                let records = store.load().unwrap();
                assert_count(&records, $count);
                assert_eq!(ids(&records), ids(&<$record>::seed()));
                assert!(storage.get(schema().storage_key).unwrap().is_some());
            }

            #[test]
            fn test_persisted_as_json_array() {
                let (storage, store) = memory_store::<$record>();
                store.load().unwrap();
                let items = stored_array(&storage, schema().storage_key);
                assert_eq!(items.len(), $count);
                assert!(items.iter().all(|item| item.get("createdAt").is_some()));
            }

            // ==================================================================
            // Create
            // ==================================================================

            #[test]
            fn test_create_valid_draft() {
                let (storage, store) = memory_store::<$record>();
                let before = store.load().unwrap();

                let created = store.create(valid_draft()).unwrap();
                assert!(!created.id().is_empty());
                assert!(!ids(&before).contains(&created.id().to_string()));
                assert_eq!(created.created_at(), today());

                let after = store.load().unwrap();
                assert_count(&after, $count + 1);
                assert_eq!(after.last().unwrap().id(), created.id());
                assert_eq!(stored_array(&storage, schema().storage_key).len(), $count + 1);
                assert_eq!(store.get(created.id()).unwrap(), Some(created.clone()));
            }

            #[test]
            fn test_create_rejects_blank_required_field() {
                let (_, store) = memory_store::<$record>();
                let mut draft = valid_draft();
                draft.set($missing, "   ");

                let err = store.create(draft).unwrap_err();
                assert!(err.is_validation());
                assert_eq!(missing_fields(err), vec![$missing.to_string()]);
                assert_eq!(store.len().unwrap(), $count);
            }

            #[test]
            fn test_create_rejects_empty_draft() {
                let (_, store) = memory_store::<$record>();
                let missing = missing_fields(store.create(Draft::new()).unwrap_err());
                let expected: Vec<String> =
                    schema().required_fields.iter().map(|f| f.to_string()).collect();
                assert_eq!(missing, expected);
            }

            // ==================================================================
            // Update / Delete
            // ==================================================================

            #[test]
            fn test_update_replaces_in_place() {
                let (_, store) = memory_store::<$record>();
                let seed = store.load().unwrap();
                let target = seed[0].clone();
                let replacement = seed[1].clone();

                store.update(target.id(), replacement.clone()).unwrap();

                let after = store.load().unwrap();
                assert_count(&after, $count);
                assert_eq!(after[0].id(), target.id());
                assert_eq!(after[0].created_at(), target.created_at());

                let mut stored = serde_json::to_value(&after[0]).unwrap();
                let expected = serde_json::to_value(&replacement).unwrap();
                stored["id"] = expected["id"].clone();
                stored["createdAt"] = expected["createdAt"].clone();
                assert_eq!(stored, expected);
            }

            #[test]
            fn test_update_unknown_id() {
                let (_, store) = memory_store::<$record>();
                let seed = store.load().unwrap();
                let err = store.update("no-such-id", seed[0].clone()).unwrap_err();
                assert!(err.is_not_found());
                assert_eq!(ids(&store.load().unwrap()), ids(&seed));
            }

            #[test]
            fn test_delete_existing() {
                let (_, store) = memory_store::<$record>();
                let seed = store.load().unwrap();
                store.delete(seed[0].id()).unwrap();

                let after = store.load().unwrap();
                assert_count(&after, $count - 1);
                assert!(store.get(seed[0].id()).unwrap().is_none());
                assert_eq!(ids(&after), ids(&seed[1..]));
            }

            #[test]
            fn test_delete_unknown_id() {
                let (_, store) = memory_store::<$record>();
                assert!(store.delete("no-such-id").unwrap_err().is_not_found());
                assert_eq!(store.len().unwrap(), $count);
            }

            #[test]
            fn test_delete_confirmed_cancelled() {
                let (_, store) = memory_store::<$record>();
                let seed = store.load().unwrap();
                let outcome = store.delete_confirmed(seed[0].id(), &NeverConfirm).unwrap();
                assert_eq!(outcome, Deletion::Cancelled);
                assert_eq!(store.len().unwrap(), $count);
            }

            #[test]
            fn test_delete_confirmed_accepted() {
                let (_, store) = memory_store::<$record>();
                let seed = store.load().unwrap();
                let outcome = store.delete_confirmed(seed[1].id(), &AlwaysConfirm).unwrap();
                assert_eq!(outcome, Deletion::Deleted);
                assert!(store.get(seed[1].id()).unwrap().is_none());
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[test]
            fn test_search_term() {
                let (_, store) = memory_store::<$record>();
                let hits = store.search($term).unwrap();
                assert_count(&hits, $hits);

                let shouted = store.search(&$term.to_uppercase()).unwrap();
                assert_eq!(ids(&shouted), ids(&hits));
            }

            #[test]
            fn test_search_blank_term() {
                let (_, store) = memory_store::<$record>();
                assert_count(&store.search("").unwrap(), $count);
                assert_count(&store.search("   ").unwrap(), $count);
            }

            #[test]
            fn test_search_no_match() {
                let (_, store) = memory_store::<$record>();
                assert!(store.search("zzz-no-such-value").unwrap().is_empty());
            }

            // ==================================================================
            // Reset
            // ==================================================================

            #[test]
            fn test_reset_reseeds() {
                let (storage, store) = memory_store::<$record>();
                store.create(valid_draft()).unwrap();
                store.reset().unwrap();
                assert!(storage.get(schema().storage_key).unwrap().is_none());
                assert_eq!(store.len().unwrap(), $count);
            }
        }
    };
}

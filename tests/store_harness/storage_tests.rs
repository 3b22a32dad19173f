//! Macro-generated test suite for the `Storage` contract.
//!
//! `$factory` must evaluate to a `(guard, storage)` pair. The guard is
//! held for the duration of the test (e.g. a temporary directory).
//!
//! ```rust,ignore
//! storage_tests!(((), InMemoryStorage::new()));
//! ```

macro_rules! storage_tests {
    ($factory:expr) => {
        mod storage_contract_tests {
            use super::*;
            use rcm::core::Storage;

            #[test]
            fn test_get_absent_slot() {
                let (_guard, storage) = $factory;
                assert!(storage.get("rcm_claims").unwrap().is_none());
            }

            #[test]
            fn test_set_then_get() {
                let (_guard, storage) = $factory;
                storage.set("rcm_claims", r#"[{"id":"1"}]"#).unwrap();
                assert_eq!(
                    storage.get("rcm_claims").unwrap().as_deref(),
                    Some(r#"[{"id":"1"}]"#)
                );
            }

            #[test]
            fn test_set_overwrites_whole_slot() {
                let (_guard, storage) = $factory;
                storage.set("rcm_payments", "[1,2,3]").unwrap();
                storage.set("rcm_payments", "[]").unwrap();
                assert_eq!(storage.get("rcm_payments").unwrap().as_deref(), Some("[]"));
            }

            #[test]
            fn test_remove_slot() {
                let (_guard, storage) = $factory;
                storage.set("rcm_stats", "{}").unwrap();
                storage.remove("rcm_stats").unwrap();
                assert!(storage.get("rcm_stats").unwrap().is_none());
            }

            #[test]
            fn test_remove_absent_slot_is_ok() {
                let (_guard, storage) = $factory;
                storage.remove("rcm_patients").unwrap();
            }

            #[test]
            fn test_keys_sorted() {
                let (_guard, storage) = $factory;
                assert!(storage.keys().unwrap().is_empty());
                storage.set("rcm_patients", "[]").unwrap();
                storage.set("rcm_claims", "[]").unwrap();
                assert_eq!(storage.keys().unwrap(), vec!["rcm_claims", "rcm_patients"]);
            }

            #[test]
            fn test_slots_are_independent() {
                let (_guard, storage) = $factory;
                storage.set("rcm_claims", "[1]").unwrap();
                storage.set("rcm_payments", "[2]").unwrap();
                storage.remove("rcm_claims").unwrap();
                assert_eq!(storage.get("rcm_payments").unwrap().as_deref(), Some("[2]"));
            }
        }
    };
}

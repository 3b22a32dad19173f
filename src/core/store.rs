//! Generic entity store: load/seed, create, update, transition, delete, search
//!
//! One `EntityStore<T>` manages one persisted collection. It keeps no copy of
//! the records: every operation reads the slot, works on the array and
//! writes the whole array back, so the slot is the single source of truth.

use crate::core::clock::{Clock, IdGenerator, SystemClock};
use crate::core::confirm::{Confirm, ConfirmPrompt, Deletion};
use crate::core::draft::Draft;
use crate::core::entity::{EntitySchema, Record, Stateful};
use crate::core::error::{StoreError, ValidationError};
use crate::core::service::Storage;
use crate::core::validation;
use std::collections::HashSet;
use std::sync::Arc;

/// Store for one entity type over a key-value [`Storage`]
pub struct EntityStore<T: Record> {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
    seed: Vec<T>,
}

impl<T: Record> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
            seed: self.seed.clone(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    /// Create a store using the wall clock and the entity's demo seed
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            clock: Arc::new(SystemClock),
            ids: Arc::new(IdGenerator::new()),
            seed: T::seed(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Share an id generator with other stores of the same session
    pub fn with_ids(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the collection written on first load
    pub fn with_seed(mut self, seed: Vec<T>) -> Self {
        self.seed = seed;
        self
    }

    pub fn schema(&self) -> EntitySchema {
        T::SCHEMA
    }

    /// Return the persisted collection, seeding the slot first if it is empty.
    ///
    /// A missing slot is not an error. A slot that holds something other
    /// than an array of `T` is reported as [`StoreError::Corrupt`].
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let key = T::SCHEMA.storage_key;
        match self.storage.get(key)? {
            Some(raw) => {
                let records: Vec<T> =
                    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
                tracing::debug!(
                    entity = T::SCHEMA.entity_type,
                    count = records.len(),
                    "loaded collection"
                );
                Ok(records)
            }
            None => {
                let seed = self.seed.clone();
                self.persist(&seed)?;
                tracing::info!(
                    entity = T::SCHEMA.entity_type,
                    key,
                    count = seed.len(),
                    "seeded empty collection"
                );
                Ok(seed)
            }
        }
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Validate a draft and append the resulting record.
    ///
    /// The store assigns `id` and `createdAt`; values the draft carries for
    /// them are ignored. On failure the collection is left untouched.
    pub fn create(&self, draft: Draft) -> Result<T, StoreError> {
        let mut records = self.load()?;

        let draft = validation::normalize(draft);
        if let Err(e) = validation::validate_draft(&T::SCHEMA, &draft) {
            tracing::warn!(entity = T::SCHEMA.entity_type, error = %e, "rejected draft");
            return Err(e.into());
        }

        let record = self.build(draft, &records)?;
        records.push(record.clone());
        self.persist(&records)?;

        tracing::info!(entity = T::SCHEMA.entity_type, id = record.id(), "created record");
        Ok(record)
    }

    /// Replace the record with `id`, keeping its position.
    ///
    /// The stored `id` and `createdAt` win over whatever `value` carries.
    /// The record is stored in its persisted form, so amounts are kept to
    /// whole cents.
    pub fn update(&self, id: &str, value: T) -> Result<(), StoreError> {
        let mut records = self.load()?;
        let pos = Self::position(&records, id)?;

        let mut draft = Draft::from_record(&value)?;
        draft.set("id", records[pos].id());
        draft.set("createdAt", records[pos].created_at().to_string());
        records[pos] = decode(draft)?;

        self.persist(&records)?;
        tracing::info!(entity = T::SCHEMA.entity_type, id, "updated record");
        Ok(())
    }

    /// Remove the record with `id`
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.load()?;
        let pos = Self::position(&records, id)?;
        records.remove(pos);

        self.persist(&records)?;
        tracing::info!(entity = T::SCHEMA.entity_type, id, "deleted record");
        Ok(())
    }

    /// Ask `confirm` before removing the record with `id`.
    ///
    /// Unknown ids fail before the user is asked. A cancelled prompt leaves
    /// the collection unchanged.
    pub fn delete_confirmed<C>(&self, id: &str, confirm: &C) -> Result<Deletion, StoreError>
    where
        C: Confirm + ?Sized,
    {
        let records = self.load()?;
        Self::position(&records, id)?;

        if !confirm.confirm(&ConfirmPrompt::default()) {
            tracing::debug!(entity = T::SCHEMA.entity_type, id, "delete cancelled");
            return Ok(Deletion::Cancelled);
        }

        self.delete(id)?;
        Ok(Deletion::Deleted)
    }

    /// Records whose search fields contain `term`, ignoring case, in
    /// collection order. A blank term matches everything; any other term
    /// is matched as given, surrounding whitespace included.
    pub fn search(&self, term: &str) -> Result<Vec<T>, StoreError> {
        let records = self.load()?;
        if term.trim().is_empty() {
            return Ok(records);
        }
        let needle = term.to_lowercase();
        Ok(records.into_iter().filter(|r| r.matches(&needle)).collect())
    }

    /// Overwrite the whole collection, e.g. when importing records
    pub fn replace_all(&self, records: Vec<T>) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id())) {
            return Err(ValidationError::DuplicateId {
                entity_type: T::SCHEMA.entity_type.to_string(),
                id: dup.id().to_string(),
            }
            .into());
        }
        self.persist(&records)
    }

    /// Drop the slot so that the next load seeds it again
    pub fn reset(&self) -> Result<(), StoreError> {
        self.storage.remove(T::SCHEMA.storage_key)?;
        tracing::info!(entity = T::SCHEMA.entity_type, "reset collection");
        Ok(())
    }

    fn build(&self, mut draft: Draft, existing: &[T]) -> Result<T, ValidationError> {
        T::prepare_draft(&mut draft, existing);
        draft.set("id", self.next_id(existing));
        draft.set("createdAt", self.clock.today().to_string());
        decode(draft)
    }

    fn next_id(&self, existing: &[T]) -> String {
        loop {
            let id = self.ids.next(self.clock.now_millis());
            if !existing.iter().any(|r| r.id() == id) {
                return id;
            }
        }
    }

    fn position(records: &[T], id: &str) -> Result<usize, StoreError> {
        records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::SCHEMA.entity_type, id))
    }

    fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records).map_err(anyhow::Error::from)?;
        self.storage.set(T::SCHEMA.storage_key, &raw)?;
        Ok(())
    }

    pub(crate) fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}

impl<T: Stateful> EntityStore<T> {
    /// Set the status of the record with `id`.
    ///
    /// Date fields tied to the new status are stamped with today's date;
    /// every other field is left as it was.
    pub fn transition_status(&self, id: &str, status: T::Status) -> Result<(), StoreError> {
        let mut records = self.load()?;
        let pos = Self::position(&records, id)?;

        let mut draft = Draft::from_record(&records[pos])?;
        let value = serde_json::to_value(status).map_err(|e| ValidationError::Malformed {
            entity_type: T::SCHEMA.entity_type.to_string(),
            message: e.to_string(),
        })?;
        draft.set(T::STATUS_FIELD, value);

        let today = self.today().to_string();
        for field in T::stamps_for(status) {
            draft.set(field, today.clone());
        }
        records[pos] = decode(draft)?;

        self.persist(&records)?;
        tracing::info!(
            entity = T::SCHEMA.entity_type,
            id,
            status = ?status,
            "status changed"
        );
        Ok(())
    }

    /// Records currently in `status`, in collection order
    pub fn with_status(&self, status: T::Status) -> Result<Vec<T>, StoreError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.status() == status)
            .collect())
    }
}

fn decode<T: Record>(draft: Draft) -> Result<T, ValidationError> {
    serde_json::from_value(draft.into_json()).map_err(|e| ValidationError::Malformed {
        entity_type: T::SCHEMA.entity_type.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::confirm::{AlwaysConfirm, NeverConfirm};
    use crate::storage::InMemoryStorage;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Note {
        id: String,
        created_at: NaiveDate,
        title: String,
        #[serde(default)]
        body: String,
        #[serde(default)]
        state: NoteState,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        archived_at: Option<NaiveDate>,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    enum NoteState {
        #[default]
        Open,
        Archived,
    }

    impl Record for Note {
        const SCHEMA: EntitySchema = EntitySchema {
            entity_type: "note",
            storage_key: "rcm_notes",
            required_fields: &["title"],
            search_fields: &["title", "body"],
            enum_fields: &[("state", &["Open", "Archived"])],
        };

        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> NaiveDate {
            self.created_at
        }

        fn seed() -> Vec<Self> {
            vec![Note {
                id: "1".to_string(),
                created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                title: "Welcome".to_string(),
                body: "First note".to_string(),
                state: NoteState::Open,
                archived_at: None,
            }]
        }
    }

    impl Stateful for Note {
        type Status = NoteState;

        const STATUS_FIELD: &'static str = "state";
        const STATUS_STAMPS: &'static [(NoteState, &'static str)] =
            &[(NoteState::Archived, "archivedAt")];

        fn status(&self) -> NoteState {
            self.state
        }
    }

    fn store() -> (InMemoryStorage, EntityStore<Note>) {
        let storage = InMemoryStorage::new();
        let clock = FixedClock::ymd(2024, 3, 1).unwrap();
        let store = EntityStore::new(Arc::new(storage.clone())).with_clock(Arc::new(clock));
        (storage, store)
    }

    #[test]
    fn test_load_seeds_and_persists() {
        let (storage, store) = store();
        assert!(storage.get("rcm_notes").unwrap().is_none());

        let notes = store.load().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(storage.get("rcm_notes").unwrap().is_some());
    }

    #[test]
    fn test_load_keeps_existing_slot() {
        let (storage, store) = store();
        storage.set("rcm_notes", "[]").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_reports_corrupt_slot() {
        let (storage, store) = store();
        storage.set("rcm_notes", "{not json").unwrap();
        let err = store.load().unwrap_err();
        assert_eq!(err.error_code(), "STORAGE_CORRUPT");
    }

    #[test]
    fn test_create_assigns_id_and_created_at() {
        let (_, store) = store();
        let draft = Draft::new()
            .with("title", "  Groceries ")
            .with("id", "1")
            .with("createdAt", "1999-01-01");

        let note = store.create(draft).unwrap();
        assert_ne!(note.id, "1");
        assert_eq!(note.created_at.to_string(), "2024-03-01");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.state, NoteState::Open);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_create_rejects_missing_title() {
        let (_, store) = store();
        let err = store.create(Draft::new().with("title", "")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_unknown_enum_value() {
        let (_, store) = store();
        let draft = Draft::new().with("title", "x").with("state", "Lost");
        assert!(store.create(draft).unwrap_err().is_validation());
    }

    #[test]
    fn test_update_preserves_position_and_identity() {
        let (_, store) = store();
        let created = store.create(Draft::new().with("title", "Second")).unwrap();

        let mut edited = store.get("1").unwrap().unwrap();
        edited.title = "Edited".to_string();
        edited.created_at = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        store.update("1", edited).unwrap();

        let notes = store.load().unwrap();
        assert_eq!(notes[0].title, "Edited");
        assert_eq!(notes[0].created_at.to_string(), "2024-01-15");
        assert_eq!(notes[1], created);
    }

    #[test]
    fn test_update_unknown_id() {
        let (_, store) = store();
        let note = store.get("1").unwrap().unwrap();
        assert!(store.update("nope", note).unwrap_err().is_not_found());
    }

    #[test]
    fn test_transition_stamps_date() {
        let (_, store) = store();
        store.transition_status("1", NoteState::Archived).unwrap();

        let note = store.get("1").unwrap().unwrap();
        assert_eq!(note.state, NoteState::Archived);
        assert_eq!(note.archived_at.map(|d| d.to_string()).as_deref(), Some("2024-03-01"));
        assert_eq!(note.title, "Welcome");
        assert_eq!(store.with_status(NoteState::Archived).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_confirmed_and_cancelled() {
        let (_, store) = store();
        assert_eq!(
            store.delete_confirmed("1", &NeverConfirm).unwrap(),
            Deletion::Cancelled
        );
        assert_eq!(store.len().unwrap(), 1);

        assert_eq!(
            store.delete_confirmed("1", &AlwaysConfirm).unwrap(),
            Deletion::Deleted
        );
        assert!(store.is_empty().unwrap());
        assert!(store.delete("1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_, store) = store();
        store
            .create(Draft::from_json(json!({"title": "Call Aetna", "body": "re: CLM002"})).unwrap())
            .unwrap();

        assert_eq!(store.search("").unwrap().len(), 2);
        assert_eq!(store.search("AETNA").unwrap().len(), 1);
        assert_eq!(store.search("clm002").unwrap().len(), 1);
        assert!(store.search("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_replace_all_rejects_duplicate_ids() {
        let (_, store) = store();
        let seed = Note::seed();
        let dup = vec![seed[0].clone(), seed[0].clone()];
        let err = store.replace_all(dup).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_reset_reseeds() {
        let (_, store) = store();
        store.delete("1").unwrap();
        assert!(store.is_empty().unwrap());

        store.reset().unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_with_seed_overrides_demo_data() {
        let (_, store) = store();
        let store = store.with_seed(Vec::new());
        assert!(store.load().unwrap().is_empty());
    }
}

//! All seven entity stores over one backend

use crate::config::RcmConfig;
use crate::core::clock::{Clock, IdGenerator, SystemClock};
use crate::core::entity::Record;
use crate::core::error::StoreError;
use crate::core::service::Storage;
use crate::core::store::EntityStore;
use crate::entities::{Appointment, Claim, CptCode, EraRecord, Insurance, Patient, Payment};
use crate::reports::{ReportData, StatsCache, SummaryStats};
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;

/// Stores for every collection of an RCM session.
///
/// The stores share one storage backend, one clock and one id generator,
/// so ids are unique across collections.
///
/// # Example
///
/// ```ignore
/// let stores = RcmStores::builder()
///     .with_storage(Arc::new(InMemoryStorage::new()))
///     .build()?;
/// let claims = stores.claims.search("aetna")?;
/// ```
#[derive(Clone)]
pub struct RcmStores {
    pub patients: EntityStore<Patient>,
    pub insurances: EntityStore<Insurance>,
    pub appointments: EntityStore<Appointment>,
    pub cpt_codes: EntityStore<CptCode>,
    pub claims: EntityStore<Claim>,
    pub payments: EntityStore<Payment>,
    pub era_records: EntityStore<EraRecord>,
    stats: StatsCache,
    clock: Arc<dyn Clock>,
}

impl RcmStores {
    pub fn builder() -> RcmStoresBuilder {
        RcmStoresBuilder::new()
    }

    /// Open the configured backend and build the stores over it
    pub fn from_config(config: &RcmConfig) -> Result<Self> {
        Self::builder()
            .with_storage(config.open_storage()?)
            .with_seed_demo_data(config.seed_demo_data)
            .build()
    }

    /// Seeded stores over a fresh in-memory backend
    pub fn in_memory() -> Result<Self> {
        Self::from_config(&RcmConfig::in_memory())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Storage keys of all collections, in dashboard order
    pub fn storage_keys() -> [&'static str; 7] {
        [
            Patient::SCHEMA.storage_key,
            Insurance::SCHEMA.storage_key,
            Appointment::SCHEMA.storage_key,
            CptCode::SCHEMA.storage_key,
            Claim::SCHEMA.storage_key,
            Payment::SCHEMA.storage_key,
            EraRecord::SCHEMA.storage_key,
        ]
    }

    pub fn stats_cache(&self) -> &StatsCache {
        &self.stats
    }

    /// Recompute the dashboard cards and refresh the `rcm_stats` slot
    pub fn summary_stats(&self) -> Result<SummaryStats, StoreError> {
        let stats = SummaryStats::compute(
            &self.patients.load()?,
            &self.claims.load()?,
            &self.payments.load()?,
            self.today(),
        );
        self.stats.store(&stats)?;
        Ok(stats)
    }

    /// Reports page figures, derived from the current claims and payments
    pub fn report(&self) -> Result<ReportData, StoreError> {
        Ok(ReportData::compute(
            &self.claims.load()?,
            &self.payments.load()?,
            self.today(),
        ))
    }

    /// Drop every slot, including the cached stats
    pub fn reset_all(&self) -> Result<(), StoreError> {
        self.patients.reset()?;
        self.insurances.reset()?;
        self.appointments.reset()?;
        self.cpt_codes.reset()?;
        self.claims.reset()?;
        self.payments.reset()?;
        self.era_records.reset()?;
        self.stats.clear()
    }
}

/// Builder for [`RcmStores`]
pub struct RcmStoresBuilder {
    storage: Option<Arc<dyn Storage>>,
    clock: Arc<dyn Clock>,
    seed_demo_data: bool,
}

impl Default for RcmStoresBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RcmStoresBuilder {
    pub fn new() -> Self {
        Self {
            storage: None,
            clock: Arc::new(SystemClock),
            seed_demo_data: true,
        }
    }

    /// Set the storage backend (required)
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// When false, empty slots start as empty collections
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    pub fn build(self) -> Result<RcmStores> {
        let storage = self
            .storage
            .ok_or_else(|| anyhow::anyhow!("Storage backend is required"))?;
        let shared = Shared {
            storage,
            clock: self.clock,
            ids: Arc::new(IdGenerator::new()),
            seed_demo_data: self.seed_demo_data,
        };

        let stores = RcmStores {
            patients: shared.store(),
            insurances: shared.store(),
            appointments: shared.store(),
            cpt_codes: shared.store(),
            claims: shared.store(),
            payments: shared.store(),
            era_records: shared.store(),
            stats: StatsCache::new(Arc::clone(&shared.storage)),
            clock: Arc::clone(&shared.clock),
        };
        tracing::info!(seed = shared.seed_demo_data, "built entity stores");
        Ok(stores)
    }
}

/// What every store of one session has in common
struct Shared {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
    seed_demo_data: bool,
}

impl Shared {
    fn store<T: Record>(&self) -> EntityStore<T> {
        let store = EntityStore::new(Arc::clone(&self.storage))
            .with_clock(Arc::clone(&self.clock))
            .with_ids(Arc::clone(&self.ids));
        if self.seed_demo_data {
            store
        } else {
            store.with_seed(Vec::new())
        }
    }
}

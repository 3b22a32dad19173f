//! # RCM Store
//!
//! Data management for a revenue cycle management (RCM) dashboard.
//!
//! ## Features
//!
//! - **Generic Entity Store**: one `EntityStore<T>` for create, update,
//!   delete, search and status transitions over every record type
//! - **Seven Record Types**: patients, insurance plans, appointments,
//!   CPT codes, claims, payments and ERA records
//! - **Pluggable Storage**: in-memory or a directory of JSON files, one
//!   slot per collection
//! - **Demo Seed Data**: empty slots are filled with demo records on first load
//! - **Status Stamps**: claims record `submittedAt` and `paidAt` when they
//!   move to Submitted or Paid
//! - **Live Reports**: dashboard cards and report figures are derived from
//!   the stored collections
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rcm::prelude::*;
//!
//! let stores = RcmStores::in_memory()?;
//!
//! let claim = stores.claims.create(
//!     Draft::new()
//!         .with("patientName", "Ann Lee")
//!         .with("serviceDate", "2024-02-01")
//!         .with("totalAmount", "150"),
//! )?;
//! stores.claims.transition_status(&claim.id, ClaimStatus::Submitted)?;
//!
//! let aetna = stores.claims.search("aetna")?;
//! let stats = stores.summary_stats()?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod registry;
pub mod reports;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AlwaysConfirm, Clock, Confirm, ConfirmPrompt, Deletion, Draft, EntitySchema, EntityStore,
        FieldValue, FixedClock, NeverConfirm, Record, Stateful, Storage, StoreError, SystemClock,
        ValidationError,
    };

    // === Macros ===
    pub use crate::{impl_stateful, record_identity};

    // === Records ===
    pub use crate::entities::{
        Appointment, AppointmentStatus, Claim, ClaimStatus, CptCode, EraClaim, EraClaimStatus,
        EraRecord, EraStatus, Insurance, InsuranceStatus, Patient, Payment, PaymentMethod,
        PaymentType,
    };

    // === Storage ===
    pub use crate::storage::{FileStorage, InMemoryStorage};

    // === Config ===
    pub use crate::config::{RcmConfig, StorageConfig};

    // === Registry & Reports ===
    pub use crate::registry::{RcmStores, RcmStoresBuilder};
    pub use crate::reports::{ReportData, ReportSummary, StatsCache, SummaryStats};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}

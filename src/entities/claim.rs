//! Insurance claims
//!
//! A claim starts as a Draft and is stamped with `submittedAt` / `paidAt`
//! when it moves to Submitted / Paid.

use crate::core::draft::Draft;
use crate::core::entity::{EntitySchema, Record};
use crate::entities::{amount, date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const CLAIM_PREFIX: &str = "CLM";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    #[default]
    Draft,
    Submitted,
    Paid,
    Rejected,
    Pending,
}

impl ClaimStatus {
    /// Report order used by the claims-by-status breakdown
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Submitted,
        ClaimStatus::Paid,
        ClaimStatus::Rejected,
        ClaimStatus::Draft,
        ClaimStatus::Pending,
    ];

    /// Sent to the payer and not yet settled
    pub fn is_outstanding(self) -> bool {
        matches!(self, ClaimStatus::Submitted | ClaimStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    /// Free-text copy of the patient's name
    pub patient_name: String,
    pub claim_number: String,
    pub service_date: NaiveDate,
    #[serde(default)]
    pub cpt_codes: Vec<String>,
    #[serde(with = "amount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default)]
    pub insurance_provider: String,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<NaiveDate>,
}

/// Next `CLMnnn` number, one above the highest in use
pub fn next_claim_number(existing: &[Claim]) -> String {
    let highest = existing
        .iter()
        .filter_map(|c| c.claim_number.strip_prefix(CLAIM_PREFIX))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", CLAIM_PREFIX, highest + 1)
}

impl Record for Claim {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "claim",
        storage_key: "rcm_claims",
        required_fields: &["patientName", "serviceDate", "totalAmount"],
        search_fields: &["patientName", "claimNumber", "insuranceProvider"],
        enum_fields: &[(
            "status",
            &["Draft", "Submitted", "Paid", "Rejected", "Pending"],
        )],
    };

    crate::record_identity!();

    fn prepare_draft(draft: &mut Draft, existing: &[Self]) {
        if draft.is_blank("claimNumber") {
            draft.set("claimNumber", next_claim_number(existing));
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Claim {
                id: "1".to_string(),
                patient_name: "John Doe".to_string(),
                claim_number: "CLM001".to_string(),
                service_date: date(2024, 1, 15),
                cpt_codes: vec!["99213".to_string(), "90471".to_string()],
                total_amount: 175.0,
                status: ClaimStatus::Paid,
                insurance_provider: "Blue Cross Blue Shield".to_string(),
                created_at: date(2024, 1, 15),
                submitted_at: Some(date(2024, 1, 16)),
                paid_at: Some(date(2024, 1, 20)),
            },
            Claim {
                id: "2".to_string(),
                patient_name: "Jane Smith".to_string(),
                claim_number: "CLM002".to_string(),
                service_date: date(2024, 1, 16),
                cpt_codes: vec!["99214".to_string()],
                total_amount: 200.0,
                status: ClaimStatus::Submitted,
                insurance_provider: "Aetna".to_string(),
                created_at: date(2024, 1, 16),
                submitted_at: Some(date(2024, 1, 17)),
                paid_at: None,
            },
            Claim {
                id: "3".to_string(),
                patient_name: "Bob Johnson".to_string(),
                claim_number: "CLM003".to_string(),
                service_date: date(2024, 1, 17),
                cpt_codes: vec!["36415".to_string()],
                total_amount: 15.0,
                status: ClaimStatus::Draft,
                insurance_provider: "Medicare".to_string(),
                created_at: date(2024, 1, 17),
                submitted_at: None,
                paid_at: None,
            },
        ]
    }
}

crate::impl_stateful!(Claim, ClaimStatus, [
    (ClaimStatus::Submitted, "submittedAt"),
    (ClaimStatus::Paid, "paidAt"),
]);

//! Electronic remittance advice (ERA) records
//!
//! One ERA is a payer's remittance for a check, listing the claims it
//! settles. Amounts are stored as JSON numbers.

use crate::core::entity::{EntitySchema, Record};
use crate::entities::{amount, date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EraStatus {
    Processed,
    #[default]
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EraClaimStatus {
    Paid,
    Denied,
    Partial,
}

/// One adjudicated claim line inside an ERA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraClaim {
    pub claim_number: String,
    pub patient_name: String,
    pub service_date: NaiveDate,
    #[serde(deserialize_with = "amount::deserialize")]
    pub charged_amount: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub paid_amount: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub adjustment_amount: f64,
    pub status: EraClaimStatus,
    /// CARC codes such as `CO-45`
    #[serde(default)]
    pub reason_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraRecord {
    pub id: String,
    pub era_number: String,
    pub payer_name: String,
    pub check_number: String,
    pub check_date: NaiveDate,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub total_amount: f64,
    #[serde(default)]
    pub claims_count: u32,
    #[serde(default)]
    pub status: EraStatus,
    #[serde(default)]
    pub claims: Vec<EraClaim>,
    pub created_at: NaiveDate,
}

impl Record for EraRecord {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "era_record",
        storage_key: "rcm_era_records",
        required_fields: &["eraNumber", "payerName", "checkNumber", "checkDate"],
        search_fields: &["eraNumber", "payerName", "checkNumber"],
        enum_fields: &[("status", &["Processed", "Pending", "Error"])],
    };

    crate::record_identity!();

    fn seed() -> Vec<Self> {
        vec![
            EraRecord {
                id: "1".to_string(),
                era_number: "ERA001".to_string(),
                payer_name: "Blue Cross Blue Shield".to_string(),
                check_number: "CHK123456".to_string(),
                check_date: date(2024, 1, 20),
                total_amount: 1250.0,
                claims_count: 5,
                status: EraStatus::Processed,
                claims: vec![
                    EraClaim {
                        claim_number: "CLM001".to_string(),
                        patient_name: "John Doe".to_string(),
                        service_date: date(2024, 1, 15),
                        charged_amount: 175.0,
                        paid_amount: 140.0,
                        adjustment_amount: 35.0,
                        status: EraClaimStatus::Paid,
                        reason_codes: vec!["CO-45".to_string()],
                    },
                    EraClaim {
                        claim_number: "CLM002".to_string(),
                        patient_name: "Jane Smith".to_string(),
                        service_date: date(2024, 1, 16),
                        charged_amount: 200.0,
                        paid_amount: 200.0,
                        adjustment_amount: 0.0,
                        status: EraClaimStatus::Paid,
                        reason_codes: Vec::new(),
                    },
                ],
                created_at: date(2024, 1, 20),
            },
            EraRecord {
                id: "2".to_string(),
                era_number: "ERA002".to_string(),
                payer_name: "Aetna".to_string(),
                check_number: "CHK789012".to_string(),
                check_date: date(2024, 1, 22),
                total_amount: 850.0,
                claims_count: 3,
                status: EraStatus::Processed,
                claims: vec![EraClaim {
                    claim_number: "CLM003".to_string(),
                    patient_name: "Bob Johnson".to_string(),
                    service_date: date(2024, 1, 17),
                    charged_amount: 300.0,
                    paid_amount: 0.0,
                    adjustment_amount: 300.0,
                    status: EraClaimStatus::Denied,
                    reason_codes: vec!["CO-97".to_string(), "CO-16".to_string()],
                }],
                created_at: date(2024, 1, 22),
            },
        ]
    }
}

crate::impl_stateful!(EraRecord, EraStatus);

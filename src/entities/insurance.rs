//! Insurance plans

use crate::core::entity::{EntitySchema, Record};
use crate::entities::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub id: String,
    pub provider_name: String,
    /// HMO, PPO, EPO, ...
    pub plan_type: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub coverage_types: Vec<String>,
    #[serde(default)]
    pub status: InsuranceStatus,
    pub created_at: NaiveDate,
}

impl Record for Insurance {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "insurance",
        storage_key: "rcm_insurances",
        required_fields: &["providerName", "planType"],
        search_fields: &["providerName", "planType"],
        enum_fields: &[("status", &["Active", "Inactive"])],
    };

    crate::record_identity!();

    fn seed() -> Vec<Self> {
        vec![
            Insurance {
                id: "1".to_string(),
                provider_name: "Blue Cross Blue Shield".to_string(),
                plan_type: "HMO".to_string(),
                contact_number: "1-800-555-0123".to_string(),
                address: "123 Insurance Way".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                coverage_types: vec![
                    "Medical".to_string(),
                    "Dental".to_string(),
                    "Vision".to_string(),
                ],
                status: InsuranceStatus::Active,
                created_at: date(2023, 1, 15),
            },
            Insurance {
                id: "2".to_string(),
                provider_name: "Aetna".to_string(),
                plan_type: "PPO".to_string(),
                contact_number: "1-800-555-0456".to_string(),
                address: "456 Health Ave".to_string(),
                city: "Hartford".to_string(),
                state: "CT".to_string(),
                zip_code: "06103".to_string(),
                coverage_types: vec!["Medical".to_string(), "Prescription".to_string()],
                status: InsuranceStatus::Active,
                created_at: date(2023, 2, 20),
            },
        ]
    }
}

crate::impl_stateful!(Insurance, InsuranceStatus);

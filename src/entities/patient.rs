//! Patient registration records

use crate::core::entity::{EntitySchema, Record, serialized_field};
use crate::core::field::FieldValue;
use crate::entities::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// Masked, e.g. `***-**-1234`
    #[serde(default)]
    pub ssn: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    /// Free text, not a reference to an insurance record
    #[serde(default)]
    pub insurance_provider: String,
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub group_number: String,
    pub created_at: NaiveDate,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Patient {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "patient",
        storage_key: "rcm_patients",
        required_fields: &["firstName", "lastName", "dateOfBirth"],
        search_fields: &["fullName", "email"],
        enum_fields: &[],
    };

    crate::record_identity!();

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "fullName" => Some(FieldValue::String(self.full_name())),
            _ => serialized_field(self, field),
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Patient {
                id: "1".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                date_of_birth: date(1985, 3, 15),
                ssn: "***-**-1234".to_string(),
                phone: "(555) 123-4567".to_string(),
                email: "john.doe@email.com".to_string(),
                address: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
                insurance_provider: "Blue Cross Blue Shield".to_string(),
                policy_number: "BC123456789".to_string(),
                group_number: "GRP001".to_string(),
                created_at: date(2023, 1, 15),
            },
            Patient {
                id: "2".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                date_of_birth: date(1990, 7, 22),
                ssn: "***-**-5678".to_string(),
                phone: "(555) 987-6543".to_string(),
                email: "jane.smith@email.com".to_string(),
                address: "456 Oak Ave".to_string(),
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
                zip_code: "90210".to_string(),
                insurance_provider: "Aetna".to_string(),
                policy_number: "AET987654321".to_string(),
                group_number: "GRP002".to_string(),
                created_at: date(2023, 2, 20),
            },
        ]
    }
}

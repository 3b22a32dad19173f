//! CPT procedure codes and their unit prices

use crate::core::entity::{EntitySchema, Record};
use crate::entities::{amount, date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CptCode {
    pub id: String,
    /// Five-character CPT code, e.g. `99213`
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(with = "amount")]
    pub unit_price: f64,
    #[serde(default = "active")]
    pub is_active: bool,
    pub created_at: NaiveDate,
}

impl Record for CptCode {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "cpt_code",
        storage_key: "rcm_cpt_codes",
        required_fields: &["code", "description", "unitPrice"],
        search_fields: &["code", "description", "category"],
        enum_fields: &[],
    };

    crate::record_identity!();

    fn seed() -> Vec<Self> {
        let code = |id: &str, code: &str, description: &str, category: &str, price: f64| CptCode {
            id: id.to_string(),
            code: code.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            unit_price: price,
            is_active: true,
            created_at: date(2023, 1, 15),
        };
        vec![
            code(
                "1",
                "99213",
                "Office/outpatient visit, established patient, level 3",
                "Office Visits",
                150.0,
            ),
            code(
                "2",
                "99214",
                "Office/outpatient visit, established patient, level 4",
                "Office Visits",
                200.0,
            ),
            code("3", "90471", "Immunization administration", "Immunizations", 25.0),
            code(
                "4",
                "36415",
                "Collection of venous blood by venipuncture",
                "Laboratory",
                15.0,
            ),
        ]
    }
}

//! Posted payments

use crate::core::entity::{EntitySchema, Record};
use crate::entities::{amount, date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    Insurance,
    #[default]
    Patient,
    Copay,
    Deductible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Check,
    #[default]
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Electronic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub patient_name: String,
    /// Free-text claim number, not checked against the claims slot
    #[serde(default)]
    pub claim_number: String,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(with = "amount")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub check_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference_number: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDate,
}

impl Record for Payment {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "payment",
        storage_key: "rcm_payments",
        required_fields: &["patientName", "amount", "paymentDate"],
        search_fields: &["patientName", "claimNumber", "paymentType"],
        enum_fields: &[
            ("paymentType", &["Insurance", "Patient", "Copay", "Deductible"]),
            ("paymentMethod", &["Check", "Cash", "Credit Card", "Electronic"]),
        ],
    };

    crate::record_identity!();

    fn seed() -> Vec<Self> {
        vec![
            Payment {
                id: "1".to_string(),
                patient_name: "John Doe".to_string(),
                claim_number: "CLM001".to_string(),
                payment_date: date(2024, 1, 20),
                payment_type: PaymentType::Insurance,
                payment_method: PaymentMethod::Electronic,
                amount: 140.0,
                check_number: String::new(),
                reference_number: "REF123456".to_string(),
                notes: "Insurance payment via ERA".to_string(),
                created_at: date(2024, 1, 20),
            },
            Payment {
                id: "2".to_string(),
                patient_name: "Jane Smith".to_string(),
                claim_number: "CLM002".to_string(),
                payment_date: date(2024, 1, 21),
                payment_type: PaymentType::Patient,
                payment_method: PaymentMethod::CreditCard,
                amount: 25.0,
                check_number: String::new(),
                reference_number: "CC789012".to_string(),
                notes: "Patient copay".to_string(),
                created_at: date(2024, 1, 21),
            },
            Payment {
                id: "3".to_string(),
                patient_name: "Bob Johnson".to_string(),
                claim_number: "CLM003".to_string(),
                payment_date: date(2024, 1, 22),
                payment_type: PaymentType::Patient,
                payment_method: PaymentMethod::Check,
                amount: 50.0,
                check_number: "1234".to_string(),
                reference_number: String::new(),
                notes: "Patient payment for remaining balance".to_string(),
                created_at: date(2024, 1, 22),
            },
        ]
    }
}

/// Sum of payment amounts
pub fn total(payments: &[Payment]) -> f64 {
    payments.iter().map(|p| p.amount).sum()
}

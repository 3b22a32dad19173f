//! Patient appointments

use crate::core::entity::{EntitySchema, Record};
use crate::entities::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "No Show")]
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    #[serde(default)]
    pub provider_name: String,
    pub appointment_date: NaiveDate,
    /// Wall-clock time as entered, `HH:MM`
    pub appointment_time: String,
    #[serde(default)]
    pub appointment_type: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDate,
}

impl Record for Appointment {
    const SCHEMA: EntitySchema = EntitySchema {
        entity_type: "appointment",
        storage_key: "rcm_appointments",
        required_fields: &["patientName", "appointmentDate", "appointmentTime"],
        search_fields: &["patientName", "providerName"],
        enum_fields: &[(
            "status",
            &["Scheduled", "Completed", "Cancelled", "No Show"],
        )],
    };

    crate::record_identity!();

    fn seed() -> Vec<Self> {
        vec![
            Appointment {
                id: "1".to_string(),
                patient_name: "John Doe".to_string(),
                provider_name: "Dr. Smith".to_string(),
                appointment_date: date(2024, 1, 15),
                appointment_time: "10:00".to_string(),
                appointment_type: "Annual Checkup".to_string(),
                status: AppointmentStatus::Scheduled,
                notes: "Regular checkup appointment".to_string(),
                created_at: date(2023, 12, 20),
            },
            Appointment {
                id: "2".to_string(),
                patient_name: "Jane Smith".to_string(),
                provider_name: "Dr. Johnson".to_string(),
                appointment_date: date(2024, 1, 16),
                appointment_time: "14:30".to_string(),
                appointment_type: "Follow-up".to_string(),
                status: AppointmentStatus::Completed,
                notes: "Follow-up for previous treatment".to_string(),
                created_at: date(2023, 12, 21),
            },
        ]
    }
}

crate::impl_stateful!(Appointment, AppointmentStatus);

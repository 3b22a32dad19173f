//! Revenue cycle record types
//!
//! Each type pairs a serde struct (camelCase on the wire) with a static
//! [`EntitySchema`](crate::core::entity::EntitySchema) and the demo seed
//! written on first load.

pub mod macros;

pub mod appointment;
pub mod claim;
pub mod cpt_code;
pub mod era;
pub mod insurance;
pub mod patient;
pub mod payment;

pub use appointment::{Appointment, AppointmentStatus};
pub use claim::{Claim, ClaimStatus};
pub use cpt_code::CptCode;
pub use era::{EraClaim, EraClaimStatus, EraRecord, EraStatus};
pub use insurance::{Insurance, InsuranceStatus};
pub use patient::Patient;
pub use payment::{Payment, PaymentMethod, PaymentType};

use chrono::NaiveDate;

/// Calendar date for seed records; arguments are literals known to be valid
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid seed date"),
    }
}

/// Serde helpers for money amounts.
///
/// Forms send amounts as text ("175.00", "$1,250") or numbers. Billing
/// slots store them as two-decimal strings. Every amount is rounded to
/// cents when it is read, so a decoded record already equals its stored form.
pub mod amount {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    /// Round to whole cents
    pub fn to_cents(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Parse "175.00", "$1,250.5" or " 10 " into a number of cents
    pub fn parse(text: &str) -> Option<f64> {
        let cleaned: String = text
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        cleaned
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(to_cents)
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) if n.is_finite() => Ok(to_cents(n)),
            Raw::Number(n) => Err(D::Error::custom(format!("invalid amount '{}'", n))),
            Raw::Text(s) => parse(&s).ok_or_else(|| D::Error::custom(format!("invalid amount '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "amount")]
        price: f64,
    }

    #[test]
    fn test_amount_parse() {
        assert_eq!(amount::parse("175.00"), Some(175.0));
        assert_eq!(amount::parse(" $1,250.5 "), Some(1250.5));
        assert_eq!(amount::parse("abc"), None);
        assert_eq!(amount::parse(""), None);
    }

    #[test]
    fn test_amount_accepts_text_and_numbers() {
        let a: Priced = serde_json::from_value(json!({"price": "10"})).unwrap();
        let b: Priced = serde_json::from_value(json!({"price": 10.5})).unwrap();
        assert_eq!(a.price, 10.0);
        assert_eq!(b.price, 10.5);
        assert!(serde_json::from_value::<Priced>(json!({"price": "ten"})).is_err());
    }

    #[test]
    fn test_amount_rounds_to_cents_on_read() {
        assert_eq!(amount::parse("99.999"), Some(100.0));
        assert_eq!(amount::parse("$12.344"), Some(12.34));

        let p: Priced = serde_json::from_value(json!({"price": 0.125})).unwrap();
        let stored = serde_json::to_value(&p).unwrap();
        let reread: Priced = serde_json::from_value(stored).unwrap();
        assert_eq!(p.price, reread.price);
    }

    #[test]
    fn test_amount_serializes_two_decimals() {
        let value = serde_json::to_value(Priced { price: 175.0 }).unwrap();
        assert_eq!(value, json!({"price": "175.00"}));
    }

    #[test]
    fn test_seed_date() {
        assert_eq!(date(2024, 1, 15).to_string(), "2024-01-15");
    }
}

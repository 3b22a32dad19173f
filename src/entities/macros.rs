//! Macros for reducing boilerplate when defining records

/// Implements the identity accessors of [`Record`](crate::core::entity::Record)
/// for a struct with `id: String` and `created_at: NaiveDate` fields.
///
/// # Example
/// ```rust,ignore
/// impl Record for Patient {
///     const SCHEMA: EntitySchema = PATIENT_SCHEMA;
///     record_identity!();
/// }
/// ```
#[macro_export]
macro_rules! record_identity {
    () => {
        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> ::chrono::NaiveDate {
            self.created_at
        }
    };
}

/// Implements [`Stateful`](crate::core::entity::Stateful) for a record whose
/// status lives in a `status` field.
///
/// # Example
/// ```rust,ignore
/// impl_stateful!(Claim, ClaimStatus, [
///     (ClaimStatus::Submitted, "submittedAt"),
///     (ClaimStatus::Paid, "paidAt"),
/// ]);
/// impl_stateful!(Insurance, InsuranceStatus);
/// ```
#[macro_export]
macro_rules! impl_stateful {
    ($type:ty, $status:ty) => {
        $crate::impl_stateful!($type, $status, []);
    };
    ($type:ty, $status:ty, [$(($variant:expr, $field:literal)),* $(,)?]) => {
        impl $crate::core::entity::Stateful for $type {
            type Status = $status;

            const STATUS_STAMPS: &'static [($status, &'static str)] = &[$(($variant, $field)),*];

            fn status(&self) -> $status {
                self.status
            }
        }
    };
}

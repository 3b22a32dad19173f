//! Dashboard and report figures derived from the stored collections
//!
//! Everything here is computed from the records passed in; nothing is
//! hardcoded. [`StatsCache`] keeps the last dashboard figures in the
//! `rcm_stats` slot.

pub mod cache;

pub use cache::StatsCache;

use crate::entities::payment;
use crate::entities::{Claim, ClaimStatus, Patient, Payment};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_patients: usize,
    /// Claims awaiting the payer (Submitted or Pending)
    pub pending_claims: usize,
    /// Payments dated in the month of `today`
    pub monthly_revenue: f64,
    /// Paid claims as a percentage of all claims
    pub collection_rate: f64,
}

impl SummaryStats {
    pub fn compute(
        patients: &[Patient],
        claims: &[Claim],
        payments: &[Payment],
        today: NaiveDate,
    ) -> Self {
        let monthly_revenue = payments
            .iter()
            .filter(|p| {
                p.payment_date.year() == today.year() && p.payment_date.month() == today.month()
            })
            .map(|p| p.amount)
            .sum();

        Self {
            total_patients: patients.len(),
            pending_claims: claims.iter().filter(|c| c.status.is_outstanding()).count(),
            monthly_revenue,
            collection_rate: collection_rate(claims),
        }
    }
}

/// Headline figures of the summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_revenue: f64,
    pub total_claims: usize,
    pub collection_rate: f64,
    /// Revenue per paid claim, 0 when no claim is paid
    pub average_reimbursement: f64,
}

impl ReportSummary {
    pub fn compute(claims: &[Claim], payments: &[Payment]) -> Self {
        let total_revenue = payment::total(payments);
        let paid = paid_claims(claims);
        Self {
            total_revenue,
            total_claims: claims.len(),
            collection_rate: collection_rate(claims),
            average_reimbursement: if paid > 0 {
                total_revenue / paid as f64
            } else {
                0.0
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingBucket {
    pub range: String,
    pub amount: f64,
    pub count: usize,
}

/// Everything the reports page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub claims_by_status: IndexMap<ClaimStatus, usize>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub aged_receivables: Vec<AgingBucket>,
    pub summary_stats: ReportSummary,
}

impl ReportData {
    pub fn compute(claims: &[Claim], payments: &[Payment], today: NaiveDate) -> Self {
        Self {
            claims_by_status: claims_by_status(claims),
            monthly_revenue: monthly_revenue(payments),
            aged_receivables: aged_receivables(claims, today),
            summary_stats: ReportSummary::compute(claims, payments),
        }
    }
}

fn paid_claims(claims: &[Claim]) -> usize {
    claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Paid)
        .count()
}

/// Paid claims over all claims, in percent; 0 for no claims
pub fn collection_rate(claims: &[Claim]) -> f64 {
    if claims.is_empty() {
        return 0.0;
    }
    paid_claims(claims) as f64 / claims.len() as f64 * 100.0
}

/// Claim counts for every status, in report order, zeros included
pub fn claims_by_status(claims: &[Claim]) -> IndexMap<ClaimStatus, usize> {
    let mut counts: IndexMap<ClaimStatus, usize> =
        ClaimStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for claim in claims {
        *counts.entry(claim.status).or_insert(0) += 1;
    }
    counts
}

/// Payment totals per calendar month, oldest first
pub fn monthly_revenue(payments: &[Payment]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for p in payments {
        *months
            .entry((p.payment_date.year(), p.payment_date.month()))
            .or_insert(0.0) += p.amount;
    }
    months
        .into_iter()
        .map(|((year, month), revenue)| MonthlyRevenue {
            month: format!("{:04}-{:02}", year, month),
            revenue,
        })
        .collect()
}

const AGING_BUCKETS: [(&str, i64, i64); 4] = [
    ("0-30 days", 0, 30),
    ("31-60 days", 31, 60),
    ("61-90 days", 61, 90),
    ("90+ days", 91, i64::MAX),
];

/// Outstanding claims grouped by days since the date of service.
///
/// Service dates in the future count as 0 days old.
pub fn aged_receivables(claims: &[Claim], today: NaiveDate) -> Vec<AgingBucket> {
    let mut buckets: Vec<AgingBucket> = AGING_BUCKETS
        .iter()
        .map(|(range, _, _)| AgingBucket {
            range: range.to_string(),
            amount: 0.0,
            count: 0,
        })
        .collect();

    for claim in claims.iter().filter(|c| c.status.is_outstanding()) {
        let age = (today - claim.service_date).num_days().max(0);
        if let Some(i) = AGING_BUCKETS
            .iter()
            .position(|(_, lo, hi)| (*lo..=*hi).contains(&age))
        {
            buckets[i].amount += claim.total_amount;
            buckets[i].count += 1;
        }
    }
    buckets
}

//! Walk through a dashboard session
//!
//! This example demonstrates:
//! - Building all seven stores from a YAML configuration
//! - Creating a claim from form input and rejecting an incomplete one
//! - Moving the claim through Submitted and Paid
//! - Searching, confirmed deletion and the dashboard figures
//!
//! Run with `cargo run --example dashboard [config.yaml]`; without an
//! argument the stores use in-memory storage.

use rcm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("🏥 RCM Dashboard Example");
    println!("========================\n");

    let config = match std::env::args().nth(1) {
        Some(path) => RcmConfig::from_yaml_file(&path)?,
        None => RcmConfig::in_memory(),
    };
    let stores = RcmStores::from_config(&config)?;

    println!("📋 Collections:");
    println!("   - {} patients", stores.patients.len()?);
    println!("   - {} insurance plans", stores.insurances.len()?);
    println!("   - {} appointments", stores.appointments.len()?);
    println!("   - {} CPT codes", stores.cpt_codes.len()?);
    println!("   - {} claims", stores.claims.len()?);
    println!("   - {} payments", stores.payments.len()?);
    println!("   - {} ERA records\n", stores.era_records.len()?);

    // A form submitted without a patient name
    let incomplete = Draft::new()
        .with("patientName", "  ")
        .with("serviceDate", stores.today().to_string())
        .with("totalAmount", "175.00");
    match stores.claims.create(incomplete) {
        Err(StoreError::Validation(e)) => {
            println!("⚠️  Rejected claim, missing {:?}", e.missing_fields())
        }
        other => println!("unexpected result: {:?}", other.map(|c| c.claim_number)),
    }

    let claim = stores.claims.create(
        Draft::new()
            .with("patientName", "Ann Lee")
            .with("serviceDate", stores.today().to_string())
            .with("cptCodes", vec!["99213", "36415"])
            .with("totalAmount", "$165")
            .with("insuranceProvider", "Aetna"),
    )?;
    println!(
        "✅ Created {} for {} ({:.2})",
        claim.claim_number, claim.patient_name, claim.total_amount
    );

    stores
        .claims
        .transition_status(&claim.id, ClaimStatus::Submitted)?;
    stores.claims.transition_status(&claim.id, ClaimStatus::Paid)?;
    if let Some(paid) = stores.claims.get(&claim.id)? {
        println!(
            "💸 {} is {:?}, submitted {:?}, paid {:?}\n",
            paid.claim_number, paid.status, paid.submitted_at, paid.paid_at
        );
    }

    println!("🔍 Claims matching \"aetna\":");
    for c in stores.claims.search("aetna")? {
        println!("   - {} {} {:?}", c.claim_number, c.patient_name, c.status);
    }
    println!();

    if let Some(first) = stores.appointments.load()?.first() {
        let outcome = stores
            .appointments
            .delete_confirmed(&first.id, &|prompt: &ConfirmPrompt| {
                println!("❓ {} {}", prompt.title, prompt.message);
                true
            })?;
        println!("   appointment {}: {:?}\n", first.id, outcome);
    }

    let stats = stores.summary_stats()?;
    println!("📊 Dashboard:");
    println!("   - Total patients:   {}", stats.total_patients);
    println!("   - Pending claims:   {}", stats.pending_claims);
    println!("   - Monthly revenue:  ${:.2}", stats.monthly_revenue);
    println!("   - Collection rate:  {:.1}%\n", stats.collection_rate);

    let report = stores.report()?;
    println!("📈 Claims by status:");
    for (status, count) in &report.claims_by_status {
        println!("   - {:?}: {}", status, count);
    }
    println!("   Aged receivables:");
    for bucket in &report.aged_receivables {
        println!(
            "   - {:<10} {:>3} claims  ${:.2}",
            bucket.range, bucket.count, bucket.amount
        );
    }

    Ok(())
}

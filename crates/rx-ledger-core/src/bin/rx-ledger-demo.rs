//! Sample submissions against the file-backed stores.
//!
//! Usage: `rx-ledger-demo [config.json]`

use anyhow::Context;
use rx_ledger_core::{LedgerConfig, PrescriptionInput, PrescriptionRecord, RecordSinks};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LedgerConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => LedgerConfig::default(),
    };
    let sinks = RecordSinks::from_config(&config);

    let mut presc1 = PrescriptionRecord::new(
        PrescriptionInput {
            first_name: "John".into(),
            last_name: "Smith".into(),
            address: "1234 Elm Street, Suburb, 12345, Country".into(),
            sphere: 0.0,
            cylinder: -2.5,
            axis: 90.0,
            examination_date: "12/12/23".into(),
            optometrist: "Dr. Adams".into(),
        },
        sinks.clone(),
    );
    println!("Valid prescription: {}", presc1.submit_prescription());

    let presc2 = PrescriptionRecord::new(
        PrescriptionInput {
            first_name: "Li".into(),
            last_name: "Wong".into(),
            address: "4321 Oak Road, Suburb, 54321, Country".into(),
            sphere: 2.0,
            cylinder: -3.0,
            axis: 45.0,
            examination_date: "21/05/23".into(),
            optometrist: "Dr. Visual".into(),
        },
        sinks,
    );
    println!("Invalid first name: {}", presc2.submit_prescription());

    println!(
        "Valid remark: {}",
        presc1.submit_remark("This prescription is accurate and detailed.", "client")
    );
    println!(
        "Invalid category: {}",
        presc1.submit_remark("This is well documented.", "other")
    );

    Ok(())
}

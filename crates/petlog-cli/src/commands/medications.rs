//! Medication commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use petlog_core::api::{ApiClient, DEFAULT_PAGE_SIZE};
use petlog_core::load_medications;
use petlog_core::models::{ListQuery, MedicationInput};
use petlog_core::view::{MedicationListView, MedicationRow};

use super::print_json;

/// Every medication of a pet, split into active and past as of `today`.
pub async fn list(client: &ApiClient, pet_id: i64, today: NaiveDate, json: bool) -> Result<()> {
    let medications =
        load_medications(client, pet_id, &ListQuery::default(), DEFAULT_PAGE_SIZE).await?;

    let view = MedicationListView::build(medications, today);
    if json {
        return print_json(&view);
    }

    if view.is_empty() {
        println!("No medications recorded.");
        return Ok(());
    }
    print_group("Active", &view.active);
    print_group("Past", &view.past);
    Ok(())
}

pub async fn add(client: &ApiClient, pet_id: i64, input: &MedicationInput) -> Result<()> {
    let medication = client
        .create_medication(pet_id, input)
        .await
        .context("Failed to add medication")?;
    println!("Added {} (id {})", medication.name, medication.id);
    Ok(())
}

fn print_group(title: &str, rows: &[MedicationRow]) {
    if rows.is_empty() {
        return;
    }
    println!("{}", title);
    for row in rows {
        println!("  {}  {}", row.name, row.period);
        if let Some(dosage) = &row.dosage {
            println!("    {}", dosage);
        }
    }
}

//! History command - renders a pet's medical history report.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use petlog_core::api::ApiClient;
use petlog_core::report::load_history_report;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Print-ready A4 HTML
    Html,
    Text,
    Json,
}

/// Runs the history command.
///
/// # Errors
///
/// Returns an error if the pet or any page of its visits cannot be
/// fetched, or the output file cannot be written.
pub async fn run(
    client: &ApiClient,
    pet_id: i64,
    format: ReportFormat,
    output: Option<&Path>,
    page_size: u32,
    issued_on: NaiveDate,
) -> Result<()> {
    let report = load_history_report(client, pet_id, page_size, issued_on).await?;

    let rendered = match format {
        ReportFormat::Html => report.to_html(),
        ReportFormat::Text => report.to_text(),
        ReportFormat::Json => report.to_json()?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                visits = report.visits.len(),
                "history report written"
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

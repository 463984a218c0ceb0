//! Weight, vet visit and daily record commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use petlog_core::api::{collect_all_pages, ApiClient, DEFAULT_PAGE_SIZE};
use petlog_core::format::{format_date, format_kg, format_yen, or_placeholder};
use petlog_core::models::{ListQuery, RecordQuery, VetVisitInput, VetVisitQuery, WeightInput};
use petlog_core::report::{fetch_vet_visits, sorted_by_date_descending};

use super::print_json;

pub async fn weights(
    client: &ApiClient,
    pet_id: i64,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let filter = ListQuery {
        from,
        to,
        ..ListQuery::default()
    };
    let weights = collect_all_pages(DEFAULT_PAGE_SIZE, |limit, offset| {
        let query = filter.clone().with_page(limit, offset);
        async move { client.list_weights(pet_id, &query).await }
    })
    .await
    .with_context(|| format!("Failed to load weights for pet {}", pet_id))?;

    if json {
        return print_json(&weights);
    }
    if weights.is_empty() {
        println!("No weights recorded.");
    }
    for weight in &weights {
        println!(
            "{}  {:>9}  {}",
            format_date(weight.measured_on),
            format_kg(weight.weight_kg),
            weight.note.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn visits(
    client: &ApiClient,
    pet_id: i64,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = VetVisitQuery {
        from,
        to,
        q: query,
        ..VetVisitQuery::default()
    };
    let visits = fetch_vet_visits(client, pet_id, &filter, DEFAULT_PAGE_SIZE).await?;
    let visits = sorted_by_date_descending(visits);

    if json {
        return print_json(&visits);
    }
    if visits.is_empty() {
        println!("No vet visits found.");
    }
    for visit in &visits {
        println!(
            "{}  {}  {}  {}",
            format_date(visit.visited_on),
            or_placeholder(visit.hospital_name.as_deref()),
            or_placeholder(visit.diagnosis_text()),
            visit.cost_yen.map(format_yen).unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn records(
    client: &ApiClient,
    pet_id: i64,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: u32,
    offset: u32,
    json: bool,
) -> Result<()> {
    let query = RecordQuery {
        limit: Some(limit),
        offset: Some(offset),
        from_date: from,
        to_date: to,
    };
    let page = client
        .list_records(pet_id, &query)
        .await
        .with_context(|| format!("Failed to load records for pet {}", pet_id))?;

    if json {
        return print_json(&page);
    }
    if page.items.is_empty() {
        println!("No records found.");
    }
    for record in &page.items {
        let mut flags = Vec::new();
        if record.has_weights {
            flags.push("weight");
        }
        if record.has_medications {
            flags.push("medication");
        }
        if record.has_vet_visits {
            flags.push("visit");
        }
        println!(
            "{}  {}  {}",
            format_date(record.recorded_on),
            or_placeholder(record.title.as_deref()),
            flags.join(", ")
        );
    }
    let shown = offset as u64 + page.items.len() as u64;
    if shown < page.total {
        println!("... {} more (use --offset {})", page.total - shown, shown);
    }
    Ok(())
}

pub async fn add_weight(client: &ApiClient, pet_id: i64, input: &WeightInput) -> Result<()> {
    let weight = client
        .create_weight(pet_id, input)
        .await
        .context("Failed to add weight")?;
    println!(
        "Recorded {} on {}",
        format_kg(weight.weight_kg),
        format_date(weight.measured_on)
    );
    Ok(())
}

pub async fn add_visit(client: &ApiClient, pet_id: i64, input: &VetVisitInput) -> Result<()> {
    let visit = client
        .create_vet_visit(pet_id, input)
        .await
        .context("Failed to add vet visit")?;
    println!(
        "Recorded vet visit on {} (id {})",
        format_date(visit.visited_on),
        visit.id
    );
    Ok(())
}

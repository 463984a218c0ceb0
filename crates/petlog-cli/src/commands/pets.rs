//! Pet commands: listing, home overview, detail, create and delete.

use anyhow::{Context, Result};
use petlog_core::api::ApiClient;
use petlog_core::models::PetInput;
use petlog_core::view::{CardSummary, HomeView, PetCard};
use petlog_core::{load_home_overview, load_pet_overview};
use tracing::info;

use super::print_json;

pub async fn health(client: &ApiClient) -> Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("Backend at {} is unreachable", client.base_url()))?;
    println!("{} {}", health.status, health.message);
    Ok(())
}

pub async fn list(client: &ApiClient, json: bool) -> Result<()> {
    let pets = client.list_pets().await.context("Failed to list pets")?;
    if json {
        return print_json(&pets);
    }

    if pets.is_empty() {
        println!("No pets registered. Add one with `petlog add-pet <name>`.");
    }
    for pet in &pets {
        println!("{:>4}  {}  {}", pet.id, pet.name, pet.species_label());
    }
    Ok(())
}

/// Runs the home command: one card per pet.
pub async fn home(client: &ApiClient, json: bool) -> Result<()> {
    let overviews = load_home_overview(client).await?;
    let view = HomeView::from_overviews(&overviews);
    if json {
        return print_json(&view);
    }

    if view.is_empty() {
        println!("No pets registered. Add one with `petlog add-pet <name>`.");
        return Ok(());
    }
    for (i, card) in view.cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_card(card);
    }
    Ok(())
}

pub async fn show(client: &ApiClient, pet_id: i64, json: bool) -> Result<()> {
    let overview = load_pet_overview(client, pet_id).await?;
    if json {
        return print_json(&overview);
    }

    let pet = &overview.pet;
    print_card(&PetCard::from_overview(&overview));
    if let Some(breed) = &pet.breed {
        println!("  Breed:        {}", breed);
    }
    if let Some(sex) = &pet.sex {
        println!("  Sex:          {}", sex);
    }
    if let Some(birth_date) = pet.birth_date {
        println!("  Born:         {}", petlog_core::format::format_date(birth_date));
    }
    if let Some(notes) = &pet.notes {
        println!("  Notes:        {}", notes);
    }
    Ok(())
}

pub async fn add(client: &ApiClient, input: &PetInput) -> Result<()> {
    let pet = client.create_pet(input).await.context("Failed to add pet")?;
    info!(pet_id = pet.id, "pet registered");
    println!("Registered {} (id {})", pet.name, pet.id);
    Ok(())
}

pub async fn delete(client: &ApiClient, pet_id: i64) -> Result<()> {
    client
        .delete_pet(pet_id)
        .await
        .with_context(|| format!("Failed to delete pet {}", pet_id))?;
    println!("Deleted pet {}", pet_id);
    Ok(())
}

fn print_card(card: &PetCard) {
    match &card.species {
        Some(species) => println!("{} ({})  #{}", card.name, species, card.pet_id),
        None => println!("{}  #{}", card.name, card.pet_id),
    }

    let Some(summary) = &card.summary else {
        println!("  Summary unavailable");
        return;
    };
    print_summary(summary);
}

fn print_summary(summary: &CardSummary) {
    match &summary.last_visit {
        Some(visit) => {
            let mut line = visit.visited_on.clone();
            for extra in [&visit.hospital_name, &visit.diagnosis].into_iter().flatten() {
                line.push_str("  ");
                line.push_str(extra);
            }
            println!("  Last visit:   {}", line);
        }
        None => println!("  Last visit:   not recorded"),
    }

    println!(
        "  Last weight:  {}",
        summary.last_weight.as_deref().unwrap_or("not recorded")
    );

    if summary.active_medication_count == 0 {
        println!("  Medications:  none");
    } else {
        println!(
            "  Medications:  {} active  {}",
            summary.active_medication_count,
            summary.medication_names.join(", ")
        );
    }
}

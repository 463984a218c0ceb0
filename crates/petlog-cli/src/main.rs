//! Petlog command-line client
//!
//! Browse pets, summaries, medications and vet history from a petlog
//! backend, and print medical history reports.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use petlog_core::api::{ApiClient, DEFAULT_PAGE_SIZE};
use petlog_core::config::ClientConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::history::ReportFormat;

/// Pet medical history client
#[derive(Parser)]
#[command(name = "petlog")]
#[command(about = "Client for the petlog pet medical history service")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL [default: $PETLOG_API_URL, then http://localhost:8000/api]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Health,

    /// List registered pets
    Pets,

    /// Every pet with its latest visit, weight and active medications
    Home,

    /// One pet with its summary
    Show {
        pet_id: i64,
    },

    /// Print a pet's medical history report
    History {
        pet_id: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Vet visits requested per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,

        /// Issue date printed on the report (defaults to today)
        #[arg(long)]
        issued_on: Option<NaiveDate>,
    },

    /// Active and past medications
    Medications {
        pet_id: i64,

        /// Reference date for active/past (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Weight measurements
    Weights {
        pet_id: i64,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Vet visits, newest first
    Visits {
        pet_id: i64,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,

        /// Search hospital, diagnosis and complaint
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Daily records
    Records {
        pet_id: i64,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long, default_value = "20")]
        limit: u32,

        #[arg(long, default_value = "0")]
        offset: u32,
    },

    /// Register a pet
    AddPet {
        name: String,

        /// e.g. "dog", "cat"
        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        breed: Option<String>,

        /// "male", "female" or "unknown"
        #[arg(long)]
        sex: Option<String>,

        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// Delete a pet and everything recorded for it
    DeletePet {
        pet_id: i64,
    },

    /// Record a weight measurement
    AddWeight {
        pet_id: i64,

        weight_kg: f64,

        /// Measurement date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Record a vet visit
    AddVisit {
        pet_id: i64,

        /// Visit date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,

        #[arg(long)]
        hospital: Option<String>,

        #[arg(long)]
        doctor: Option<String>,

        #[arg(long)]
        complaint: Option<String>,

        #[arg(long)]
        diagnosis: Option<String>,

        /// Cost in yen
        #[arg(long)]
        cost: Option<i64>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Start a medication course
    AddMedication {
        pet_id: i64,

        name: String,

        /// First day (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day; omit for an ongoing course
        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        dosage: Option<String>,

        #[arg(long)]
        frequency: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("petlog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("petlog=info"))
    };
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url).context("Invalid --api-url")?,
        None => ClientConfig::from_env().context("Invalid PETLOG_API_URL")?,
    };
    debug!(base_url = %config.base_url, "using backend");
    let client = ApiClient::new(&config).context("Failed to build HTTP client")?;
    let today = chrono::Local::now().date_naive();
    let json = cli.json;

    match cli.command {
        Commands::Health => commands::pets::health(&client).await?,
        Commands::Pets => commands::pets::list(&client, json).await?,
        Commands::Home => commands::pets::home(&client, json).await?,
        Commands::Show { pet_id } => commands::pets::show(&client, pet_id, json).await?,
        Commands::History {
            pet_id,
            format,
            output,
            page_size,
            issued_on,
        } => {
            let issued_on = issued_on.unwrap_or(today);
            commands::history::run(
                &client,
                pet_id,
                format,
                output.as_deref(),
                page_size,
                issued_on,
            )
            .await?;
        }
        Commands::Medications { pet_id, today: on } => {
            commands::medications::list(&client, pet_id, on.unwrap_or(today), json).await?;
        }
        Commands::Weights { pet_id, from, to } => {
            commands::entries::weights(&client, pet_id, from, to, json).await?;
        }
        Commands::Visits {
            pet_id,
            from,
            to,
            query,
        } => {
            commands::entries::visits(&client, pet_id, from, to, query, json).await?;
        }
        Commands::Records {
            pet_id,
            from,
            to,
            limit,
            offset,
        } => {
            commands::entries::records(&client, pet_id, from, to, limit, offset, json).await?;
        }
        Commands::AddPet {
            name,
            species,
            breed,
            sex,
            birth_date,
        } => {
            let input = petlog_core::models::PetInput {
                name,
                species,
                breed,
                sex,
                birth_date,
                ..Default::default()
            };
            commands::pets::add(&client, &input).await?;
        }
        Commands::DeletePet { pet_id } => commands::pets::delete(&client, pet_id).await?,
        Commands::AddWeight {
            pet_id,
            weight_kg,
            on,
            note,
        } => {
            let mut input =
                petlog_core::models::WeightInput::new(on.unwrap_or(today), weight_kg);
            input.note = note;
            commands::entries::add_weight(&client, pet_id, &input).await?;
        }
        Commands::AddVisit {
            pet_id,
            on,
            hospital,
            doctor,
            complaint,
            diagnosis,
            cost,
            note,
        } => {
            let input = petlog_core::models::VetVisitInput {
                hospital_name: hospital,
                doctor_name: doctor,
                chief_complaint: complaint,
                diagnosis,
                cost_yen: cost,
                note,
                ..petlog_core::models::VetVisitInput::new(on.unwrap_or(today))
            };
            commands::entries::add_visit(&client, pet_id, &input).await?;
        }
        Commands::AddMedication {
            pet_id,
            name,
            start,
            end,
            dosage,
            frequency,
        } => {
            let input = petlog_core::models::MedicationInput {
                end_on: end,
                dosage,
                frequency,
                ..petlog_core::models::MedicationInput::new(name, start.unwrap_or(today))
            };
            commands::medications::add(&client, pet_id, &input).await?;
        }
    }

    Ok(())
}

//! CLI command implementations.

pub mod entries;
pub mod history;
pub mod medications;
pub mod pets;

use anyhow::Result;
use serde::Serialize;

/// Pretty-print `value` as JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use anyhow::{Context, Result};
use std::path::Path;

use super::config::Config;
use super::records::TrainRecord;
use super::roster::{Roster, Selection};
use super::storage;
use super::table;

fn load_roster(file: &Path) -> Result<Roster> {
    storage::load(file).with_context(|| format!("Invalid data in {}", file.display()))
}

/// Adds a train to the roster file, creating the file if needed.
pub fn add(file: &Path, record: TrainRecord, config: &Config) -> Result<Roster> {
    let roster = load_roster(file)?.add(record);
    storage::save(file, &roster, config.storage.indent)?;
    Ok(roster)
}

pub fn display(file: &Path, config: &Config) -> Result<String> {
    let roster = load_roster(file)?;
    Ok(table::render(&roster, &config.table))
}

/// Lists trains departing at or after `departure_time`.
pub fn select(file: &Path, departure_time: &str, config: &Config) -> Result<String> {
    let roster = load_roster(file)?;
    let mut out = format!("Trains departing at or after {departure_time}:\n");
    match roster.select(departure_time) {
        Selection::Found(records) => out.push_str(&table::render(&records, &config.table)),
        Selection::NoTrainsFound => {
            out.push_str(&format!("No trains depart at or after {departure_time}.\n"))
        }
    }
    Ok(out)
}

/// Like `display`, but `None` when the file does not exist instead of an empty table.
pub fn display_existing(file: &Path, config: &Config) -> Result<Option<String>> {
    if !file.exists() {
        return Ok(None);
    }
    display(file, config).map(Some)
}

/// Like `select`, but `None` when the file does not exist.
pub fn select_existing(
    file: &Path,
    departure_time: &str,
    config: &Config,
) -> Result<Option<String>> {
    if !file.exists() {
        return Ok(None);
    }
    select(file, departure_time, config).map(Some)
}

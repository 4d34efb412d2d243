use anyhow::{Context, Result};
use fs_err::read_to_string;
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub storage: StorageConfig,
}

/// Column widths of the rendered roster table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub destination_width: usize,
    pub number_width: usize,
    pub time_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            destination_width: 35,
            number_width: 15,
            time_width: 25,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Spaces per indentation level in saved roster files.
    pub indent: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig { indent: 4 }
    }
}

/// Loads settings from a TOML file. With no path the built-in defaults are used.
pub fn load(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = config_path else {
        debug!("No config file given, using defaults");
        return Ok(Config::default());
    };
    info!("Reading config from {}", path.display());
    let file = read_to_string(path)?;
    let config: Config =
        toml::from_str(&file).with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

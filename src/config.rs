//! Configuration types for the restaurant directory

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Airtable connection settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirtableConfig {
    /// REST endpoint root
    pub endpoint: String,

    /// Base identifier; `AIRTABLE_BASE_KEY` overrides it
    pub base_key: Option<String>,

    /// API key; prefer the `AIRTABLE_API_KEY` environment variable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Table holding the restaurants
    pub table: String,

    /// View to read records through. Renaming the view in Airtable breaks the fetch.
    pub view: String,

    /// Server-side formula selecting records flagged for display
    pub filter_formula: String,

    /// Upper bound on records returned
    pub max_records: u32,

    /// Records per page (Airtable caps this at 100)
    pub page_size: u32,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.airtable.com/v0".to_string(),
            base_key: None,
            api_key: None,
            table: "Restaurants".to_string(),
            view: "Grid view".to_string(),
            filter_formula: "display = '1'".to_string(),
            max_records: 999_999,
            page_size: 100,
        }
    }
}

impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("endpoint", &self.endpoint)
            .field("base_key", &self.base_key)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("table", &self.table)
            .field("view", &self.view)
            .field("filter_formula", &self.filter_formula)
            .field("max_records", &self.max_records)
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Configuration for the restaurant directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site language; detected from the system locale when absent
    pub language: Option<Language>,

    /// Where `fetch` writes the snapshot and `list`/`browse` read it
    pub snapshot: PathBuf,

    /// Data source settings
    pub airtable: AirtableConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            snapshot: PathBuf::from("restaurants.json"),
            airtable: AirtableConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Jantarada configuration file
# This file uses TOML format (https://toml.io)

# Site language: "pt-PT" or "en-GB"
# Leave unset to follow the system locale
language = "pt-PT"

# Snapshot written by `jantarada fetch` and read by `list` and `browse`
snapshot = "restaurants.json"

[airtable]
endpoint = "https://api.airtable.com/v0"

# Base identifier (or set AIRTABLE_BASE_KEY)
# base_key = "appXXXXXXXXXXXXXX"

# Keep the API key out of this file; set AIRTABLE_API_KEY instead

table = "Restaurants"

# NOTE: renaming the view in Airtable breaks the fetch
view = "Grid view"

# Only records flagged for display are fetched
filter_formula = "display = '1'"

max_records = 999999
page_size = 100
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

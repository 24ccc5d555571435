//! Error types for the restaurant directory

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the restaurant directory
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Airtable returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown language tag '{0}' (expected pt-PT or en-GB)")]
    UnknownLanguage(String),
}

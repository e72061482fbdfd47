//! CLI error types

use pricer_core::types::{CurrencyError, DateError, PricingError};
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `pricer` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Parameters or ranges rejected
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Unknown currency code
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Unreadable date
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Malformed JSON input or unserialisable output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

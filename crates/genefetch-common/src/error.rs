//! Error types for genefetch

use thiserror::Error;

/// Result type alias for genefetch operations
pub type Result<T> = std::result::Result<T, GeneFetchError>;

/// Main error type for genefetch
#[derive(Error, Debug)]
pub enum GeneFetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid gene symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneFetchError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Validate a gene symbol supplied by the caller.
///
/// Only blank symbols are rejected. Anything else is returned as given;
/// case and spelling are left to the sources.
pub fn validate_symbol(symbol: &str) -> Result<&str> {
    if symbol.trim().is_empty() {
        return Err(GeneFetchError::InvalidSymbol(symbol.to_string()));
    }
    Ok(symbol)
}

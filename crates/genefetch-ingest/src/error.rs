//! Error types for gene source fetches
//!
//! A non-success HTTP status is not an error: sources turn it into an empty
//! record. These variants cover the faults that end one source's fetch.

use genefetch_common::SourceKind;

/// Result type for source operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Faults raised while fetching from a single source
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{source_kind} response is missing required field '{field}'")]
    MissingField {
        source_kind: SourceKind,
        field: &'static str,
    },

    #[error("No element matching '{selector}' in page")]
    Extraction { selector: &'static str },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

impl IngestError {
    pub fn missing_field(source_kind: SourceKind, field: &'static str) -> Self {
        Self::MissingField { source_kind, field }
    }
}

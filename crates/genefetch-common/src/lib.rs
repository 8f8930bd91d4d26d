//! genefetch Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the genefetch workspace.
//!
//! # Overview
//!
//! - **Error Handling**: workspace error type and result alias
//! - **Logging**: tracing subscriber setup shared by every binary
//! - **Types**: the ordered gene record every source produces and the
//!   aggregator merges
//!
//! # Example
//!
//! ```
//! use genefetch_common::types::{FieldValue, GeneRecord, fields};
//!
//! let mut record = GeneRecord::new();
//! record.insert(fields::DESCRIPTION, FieldValue::text("Lysine demethylase 6A"));
//! assert_eq!(record.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{GeneFetchError, Result};
pub use types::{FieldValue, GeneRecord, SourceKind};

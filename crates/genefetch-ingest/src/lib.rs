//! genefetch Ingest Library
//!
//! Gathers descriptive information about a human gene from three public
//! sources and merges it into one record keyed by field name.
//!
//! # Supported Data Sources
//!
//! - **Ensembl**: description, synonyms, location, biotype, regulatory features
//! - **NCBI**: official full name and gene summary via E-utilities
//! - **GeneCards**: summary text scraped from the gene card page
//!
//! # Example
//!
//! ```no_run
//! use genefetch_ingest::{GeneAggregator, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let aggregator = GeneAggregator::new(&SourceConfig::default())?;
//!     let report = aggregator.fetch_gene_data("KDM6A").await?;
//!     println!("{}", serde_json::to_string_pretty(&report.record)?);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod config;
pub mod endpoints;
pub mod ensembl;
pub mod error;
pub mod genecards;
pub mod ncbi;
pub mod output;
pub mod source;

pub use aggregator::{merge_records, GeneAggregator, GeneReport, SourceFailure};
pub use config::SourceConfig;
pub use error::IngestError;
pub use source::GeneSource;

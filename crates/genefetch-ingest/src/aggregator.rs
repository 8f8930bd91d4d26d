//! Combines the per-source records into one gene record
//!
//! Sources run one after another in a fixed order. A source that faults
//! contributes nothing; its error is kept in the [`GeneReport`] and the
//! remaining sources still run.

use chrono::{DateTime, Utc};
use genefetch_common::error::validate_symbol;
use genefetch_common::{GeneRecord, Result, SourceKind};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::SourceConfig;
use crate::ensembl::EnsemblClient;
use crate::genecards::GeneCardsClient;
use crate::ncbi::NcbiClient;
use crate::source::GeneSource;

/// A source that faulted during aggregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub message: String,
}

/// Outcome of one aggregation run
#[derive(Debug, Clone, Serialize)]
pub struct GeneReport {
    pub symbol: String,
    pub retrieved_at: DateTime<Utc>,
    pub record: GeneRecord,
    pub failures: Vec<SourceFailure>,
}

impl GeneReport {
    /// True when no source faulted
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Merge per-source records in the order given.
///
/// A key present in more than one record takes the value from the record
/// that comes last.
pub fn merge_records<I>(parts: I) -> GeneRecord
where
    I: IntoIterator<Item = (SourceKind, GeneRecord)>,
{
    let mut combined = GeneRecord::new();
    for (source, record) in parts {
        for key in record.keys().filter(|k| combined.contains_key(k)) {
            warn!(%source, key, "Field overwritten by later source");
        }
        combined.merge(record);
    }
    combined
}

/// Runs every configured source for a gene symbol
pub struct GeneAggregator {
    sources: Vec<Box<dyn GeneSource>>,
}

impl GeneAggregator {
    /// Ensembl, NCBI and GeneCards sources sharing one HTTP client
    pub fn new(config: &SourceConfig) -> Result<Self> {
        config.validate()?;
        let client = config.build_client()?;

        Ok(Self::with_sources(vec![
            Box::new(EnsemblClient::new(client.clone(), &config.ensembl_base_url)),
            Box::new(NcbiClient::new(client.clone(), &config.eutils_base_url)),
            Box::new(GeneCardsClient::new(client, &config.genecards_base_url)),
        ]))
    }

    /// Use `sources` in the given merge order
    pub fn with_sources(sources: Vec<Box<dyn GeneSource>>) -> Self {
        Self { sources }
    }

    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    /// Fetch and merge everything known about `symbol`
    #[instrument(skip(self))]
    pub async fn fetch_gene_data(&self, symbol: &str) -> Result<GeneReport> {
        let symbol = validate_symbol(symbol)?;
        let mut parts = Vec::with_capacity(self.sources.len());
        let mut failures = Vec::new();

        for source in &self.sources {
            let kind = source.kind();
            match source.fetch(symbol).await {
                Ok(record) => {
                    info!(source = %kind, fields = record.len(), "Source fetched");
                    parts.push((kind, record));
                },
                Err(err) => {
                    warn!(source = %kind, error = %err, "Source failed, skipping its fields");
                    failures.push(SourceFailure {
                        source: kind,
                        message: err.to_string(),
                    });
                },
            }
        }

        Ok(GeneReport {
            symbol: symbol.to_string(),
            retrieved_at: Utc::now(),
            record: merge_records(parts),
            failures,
        })
    }
}

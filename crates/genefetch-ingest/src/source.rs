//! The seam between the aggregator and the individual services

use async_trait::async_trait;
use genefetch_common::{GeneRecord, SourceKind};

use crate::error::Result;

/// A service that can describe a gene given its symbol.
///
/// Implementations return an empty record when the service answers with a
/// non-success status, and an error only for faults that leave nothing
/// trustworthy to report.
#[async_trait]
pub trait GeneSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    async fn fetch(&self, symbol: &str) -> Result<GeneRecord>;
}

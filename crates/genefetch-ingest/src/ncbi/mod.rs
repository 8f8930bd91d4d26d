//! NCBI E-utilities gene source
//!
//! Resolves a symbol to a gene id with `esearch`, then reads the official
//! name and summary with `esummary`. The summary call is only made when the
//! search returned at least one id.

pub mod models;

use async_trait::async_trait;
use genefetch_common::types::{fields, NOT_AVAILABLE};
use genefetch_common::{GeneRecord, SourceKind};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::endpoints;
use crate::error::{IngestError, Result};
use crate::source::GeneSource;
use models::{EsearchResponse, EsummaryResponse, GeneSummary};

const FAILURE_NOTICE: &str = "Failed to retrieve data from NCBI.";

/// Client for NCBI E-utilities
pub struct NcbiClient {
    client: Client,
    base_url: String,
}

impl NcbiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the literature record for `symbol`
    #[instrument(skip(self), fields(source = %SourceKind::Ncbi))]
    pub async fn gene_summary(&self, symbol: &str) -> Result<GeneRecord> {
        let Some(gene_id) = self.esearch(symbol).await? else {
            warn!("{}", FAILURE_NOTICE);
            return Ok(GeneRecord::new());
        };
        debug!(%gene_id, "NCBI esearch resolved gene id");

        let response = self
            .client
            .get(endpoints::ncbi_esummary_url(&self.base_url))
            .query(&endpoints::ncbi_esummary_params(&gene_id))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "{}", FAILURE_NOTICE);
            return Ok(GeneRecord::new());
        }

        let summary: EsummaryResponse = serde_json::from_slice(&response.bytes().await?)?;
        summary_record(summary, &gene_id)
    }

    /// Resolve `symbol` to the first matching human gene id
    async fn esearch(&self, symbol: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(endpoints::ncbi_esearch_url(&self.base_url))
            .query(&endpoints::ncbi_esearch_params(symbol))
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "NCBI esearch returned non-success status");
            return Ok(None);
        }

        let search: EsearchResponse = serde_json::from_slice(&response.bytes().await?)?;
        Ok(search.first_id().map(String::from))
    }
}

/// Build the literature fields from an esummary payload
pub fn summary_record(response: EsummaryResponse, gene_id: &str) -> Result<GeneRecord> {
    let entry = response
        .result
        .and_then(|mut result| result.remove(gene_id))
        .ok_or_else(|| IngestError::missing_field(SourceKind::Ncbi, "result"))?;
    let summary: GeneSummary = serde_json::from_value(entry)?;

    let mut record = GeneRecord::new();
    record.insert(
        fields::OFFICIAL_FULL_NAME,
        summary.nomenclature.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    record.insert(
        fields::SUMMARY,
        summary.summary.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    Ok(record)
}

#[async_trait]
impl GeneSource for NcbiClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Ncbi
    }

    async fn fetch(&self, symbol: &str) -> Result<GeneRecord> {
        self.gene_summary(symbol).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_id() {
        let search: EsearchResponse = serde_json::from_value(json!({
            "esearchresult": { "count": "2", "idlist": ["7403", "100"] }
        }))
        .unwrap();
        assert_eq!(search.first_id(), Some("7403"));
    }

    #[test]
    fn test_first_id_absent_or_empty() {
        let empty: EsearchResponse =
            serde_json::from_value(json!({ "esearchresult": { "idlist": [] } })).unwrap();
        assert_eq!(empty.first_id(), None);

        let absent: EsearchResponse =
            serde_json::from_value(json!({ "esearchresult": { "count": "0" } })).unwrap();
        assert_eq!(absent.first_id(), None);

        let no_result: EsearchResponse =
            serde_json::from_value(json!({ "header": {} })).unwrap();
        assert_eq!(no_result.first_id(), None);
    }

    #[test]
    fn test_summary_record_defaults() {
        let response: EsummaryResponse = serde_json::from_value(json!({
            "result": { "uids": ["7403"], "7403": { "name": "KDM6A" } }
        }))
        .unwrap();

        let record = summary_record(response, "7403").unwrap();
        assert_eq!(record.get(fields::OFFICIAL_FULL_NAME).unwrap().as_text(), Some("N/A"));
        assert_eq!(record.get(fields::SUMMARY).unwrap().as_text(), Some("N/A"));
    }

    #[test]
    fn test_summary_record_missing_id() {
        let response: EsummaryResponse =
            serde_json::from_value(json!({ "result": { "uids": [] } })).unwrap();

        let err = summary_record(response, "7403").unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingField {
                source_kind: SourceKind::Ncbi,
                field: "result"
            }
        ));
    }
}

//! Ensembl REST annotation source
//!
//! Two calls per gene:
//! - `lookup/symbol/human/{symbol}` for description, synonyms, location and
//!   biotype
//! - `regulatory/species/homo_sapiens/feature/{symbol}` for overlapping
//!   regulatory features
//!
//! A failed lookup yields an empty record. A failed regulatory call only
//! empties the feature list.

pub mod models;

use async_trait::async_trait;
use genefetch_common::types::{fields, NOT_AVAILABLE};
use genefetch_common::{FieldValue, GeneRecord, SourceKind};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::endpoints;
use crate::error::{IngestError, Result};
use crate::source::GeneSource;
use models::{GeneLookup, RegulatoryFeature};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the Ensembl REST API
pub struct EnsemblClient {
    client: Client,
    base_url: String,
}

impl EnsemblClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the annotation record for `symbol`
    #[instrument(skip(self), fields(source = %SourceKind::Ensembl))]
    pub async fn annotation(&self, symbol: &str) -> Result<GeneRecord> {
        let url = endpoints::ensembl_lookup_url(&self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Failed to retrieve data from Ensembl.");
            return Ok(GeneRecord::new());
        }

        let lookup: GeneLookup = serde_json::from_slice(&response.bytes().await?)?;
        let mut record = annotation_record(lookup)?;

        let features = self.regulatory_features(symbol).await;
        debug!(count = features.len(), "Ensembl regulatory features resolved");
        record.insert(fields::REGULATORY_FEATURES, FieldValue::List(features));

        Ok(record)
    }

    /// Regulatory features overlapping `symbol`, empty on any failure
    async fn regulatory_features(&self, symbol: &str) -> Vec<String> {
        match self.fetch_regulatory_features(symbol).await {
            Ok(features) => features.iter().map(ToString::to_string).collect(),
            Err(err) => {
                warn!(error = %err, "Regulatory features unavailable, continuing without them");
                Vec::new()
            },
        }
    }

    async fn fetch_regulatory_features(&self, symbol: &str) -> Result<Vec<RegulatoryFeature>> {
        let url = endpoints::ensembl_regulatory_url(&self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await?
            .error_for_status()?;

        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }
}

/// Build the annotation fields from a lookup payload.
///
/// The regulatory feature list is appended by the caller.
pub fn annotation_record(lookup: GeneLookup) -> Result<GeneRecord> {
    let location = {
        let region = lookup
            .seq_region_name
            .ok_or_else(|| IngestError::missing_field(SourceKind::Ensembl, "seq_region_name"))?;
        let start = lookup
            .start
            .ok_or_else(|| IngestError::missing_field(SourceKind::Ensembl, "start"))?;
        let end = lookup
            .end
            .ok_or_else(|| IngestError::missing_field(SourceKind::Ensembl, "end"))?;
        format!("{}:{}-{}", region, start, end)
    };

    let synonyms = lookup.synonyms.unwrap_or_default().join(", ");
    let synonyms = if synonyms.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        synonyms
    };

    let mut record = GeneRecord::new();
    record.insert(
        fields::DESCRIPTION,
        lookup.description.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    record.insert(fields::SYNONYMS, synonyms);
    record.insert(fields::LOCATION, location);
    record.insert(
        fields::GENE_TYPE,
        lookup.biotype.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    Ok(record)
}

#[async_trait]
impl GeneSource for EnsemblClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Ensembl
    }

    async fn fetch(&self, symbol: &str) -> Result<GeneRecord> {
        self.annotation(symbol).await
    }
}

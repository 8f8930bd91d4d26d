//! NCBI E-utilities payloads (JSON `retmode`)

use serde::Deserialize;
use std::collections::HashMap;

/// `esearch.fcgi` response
#[derive(Debug, Clone, Deserialize)]
pub struct EsearchResponse {
    pub esearchresult: Option<EsearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EsearchResult {
    #[serde(default)]
    pub idlist: Option<Vec<String>>,
}

impl EsearchResponse {
    /// First gene id of the search, if any
    pub fn first_id(&self) -> Option<&str> {
        self.esearchresult
            .as_ref()?
            .idlist
            .as_ref()?
            .first()
            .map(String::as_str)
    }
}

/// `esummary.fcgi` response; `result` is keyed by gene id
#[derive(Debug, Clone, Deserialize)]
pub struct EsummaryResponse {
    pub result: Option<HashMap<String, serde_json::Value>>,
}

/// The per-id summary object
#[derive(Debug, Clone, Deserialize)]
pub struct GeneSummary {
    pub nomenclature: Option<String>,
    pub summary: Option<String>,
}

//! Upstream endpoint URL builders
//!
//! Gene symbols interpolated into a path are percent-encoded. Query values
//! are returned as parameter pairs and encoded by `reqwest`'s `query()`.
//! Symbols made of letters, digits, `-`, `_`, `.` and `~` come out unchanged
//! either way.

use urlencoding::encode;

/// Query parameters for one request
pub type QueryParams = Vec<(&'static str, String)>;

/// Ensembl gene lookup by symbol, with related objects expanded
pub fn ensembl_lookup_url(base_url: &str, symbol: &str) -> String {
    format!("{}/lookup/symbol/human/{}?expand=1", base_url, encode(symbol))
}

/// Ensembl regulatory features overlapping a gene
pub fn ensembl_regulatory_url(base_url: &str, symbol: &str) -> String {
    format!(
        "{}/regulatory/species/homo_sapiens/feature/{}?content-type=application/json",
        base_url,
        encode(symbol)
    )
}

/// Search term restricting a gene symbol to human records
pub fn ncbi_gene_term(symbol: &str) -> String {
    format!("{}[Gene] AND human[Organism]", symbol)
}

/// NCBI esearch endpoint
pub fn ncbi_esearch_url(base_url: &str) -> String {
    format!("{}/esearch.fcgi", base_url)
}

/// esearch parameters for a human gene symbol
pub fn ncbi_esearch_params(symbol: &str) -> QueryParams {
    vec![
        ("db", "gene".to_string()),
        ("term", ncbi_gene_term(symbol)),
        ("retmode", "json".to_string()),
    ]
}

/// NCBI esummary endpoint
pub fn ncbi_esummary_url(base_url: &str) -> String {
    format!("{}/esummary.fcgi", base_url)
}

/// esummary parameters for a single gene id
pub fn ncbi_esummary_params(gene_id: &str) -> QueryParams {
    vec![
        ("db", "gene".to_string()),
        ("id", gene_id.to_string()),
        ("retmode", "json".to_string()),
    ]
}

/// GeneCards gene card page
pub fn genecards_card_url(base_url: &str) -> String {
    format!("{}/cgi-bin/carddisp.pl", base_url)
}

/// Card page parameters for a gene symbol
pub fn genecards_card_params(symbol: &str) -> QueryParams {
    vec![("gene", symbol.to_string())]
}

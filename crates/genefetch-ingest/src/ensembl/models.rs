//! Ensembl REST payloads

use serde::Deserialize;

/// A JSON scalar that may arrive as a number or a string.
///
/// Ensembl sends coordinates as integers and region names as strings, but
/// the formatted output must match whatever the payload carried.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// `GET /lookup/symbol/human/{symbol}` response
#[derive(Debug, Clone, Deserialize)]
pub struct GeneLookup {
    pub description: Option<String>,

    #[serde(default)]
    pub synonyms: Option<Vec<String>>,

    pub seq_region_name: Option<Scalar>,
    pub start: Option<Scalar>,
    pub end: Option<Scalar>,
    pub biotype: Option<String>,
}

/// One entry of `GET /regulatory/species/homo_sapiens/feature/{symbol}`
#[derive(Debug, Clone, Deserialize)]
pub struct RegulatoryFeature {
    pub feature_type: String,
    pub seq_region_name: Scalar,
    pub start: Scalar,
    pub end: Scalar,
}

impl std::fmt::Display for RegulatoryFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}-{}",
            self.feature_type, self.seq_region_name, self.start, self.end
        )
    }
}

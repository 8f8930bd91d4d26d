//! Source endpoint configuration
//!
//! Base URLs for the three upstream services plus HTTP client settings.
//! Defaults point at the public services; every value can be overridden
//! through `GENEFETCH_*` environment variables or the builder.

use genefetch_common::{GeneFetchError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENSEMBL_URL: &str = "https://rest.ensembl.org";
pub const DEFAULT_EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const DEFAULT_GENECARDS_URL: &str = "https://www.genecards.org";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by all gene sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Ensembl REST base URL
    pub ensembl_base_url: String,

    /// NCBI E-utilities base URL
    pub eutils_base_url: String,

    /// GeneCards site base URL
    pub genecards_base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ensembl_base_url: DEFAULT_ENSEMBL_URL.to_string(),
            eutils_base_url: DEFAULT_EUTILS_URL.to_string(),
            genecards_base_url: DEFAULT_GENECARDS_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("genefetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SourceConfig {
    /// Create new config with builder pattern
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::default()
    }

    /// Load config from environment variables
    ///
    /// - `GENEFETCH_ENSEMBL_URL`
    /// - `GENEFETCH_EUTILS_URL`
    /// - `GENEFETCH_GENECARDS_URL`
    /// - `GENEFETCH_TIMEOUT_SECS`
    /// - `GENEFETCH_USER_AGENT`
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("GENEFETCH_ENSEMBL_URL") {
            builder = builder.ensembl_base_url(url);
        }

        if let Ok(url) = std::env::var("GENEFETCH_EUTILS_URL") {
            builder = builder.eutils_base_url(url);
        }

        if let Ok(url) = std::env::var("GENEFETCH_GENECARDS_URL") {
            builder = builder.genecards_base_url(url);
        }

        if let Ok(secs) = std::env::var("GENEFETCH_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|_| {
                GeneFetchError::config(format!("GENEFETCH_TIMEOUT_SECS must be an integer, got {:?}", secs))
            })?;
            builder = builder.timeout_secs(secs);
        }

        if let Ok(agent) = std::env::var("GENEFETCH_USER_AGENT") {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("Ensembl", &self.ensembl_base_url),
            ("E-utilities", &self.eutils_base_url),
            ("GeneCards", &self.genecards_base_url),
        ] {
            if url.is_empty() {
                return Err(GeneFetchError::config(format!("{} base URL cannot be empty", name)));
            }
        }

        if self.timeout_secs == 0 {
            return Err(GeneFetchError::config("Timeout must be greater than 0"));
        }

        Ok(())
    }

    /// Build the HTTP client every source shares
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| GeneFetchError::config(format!("Failed to build HTTP client: {}", e)))
    }
}

fn normalize_base_url(url: impl Into<String>) -> String {
    url.into().trim().trim_end_matches('/').to_string()
}

/// Builder for SourceConfig
#[derive(Default)]
pub struct SourceConfigBuilder {
    config: SourceConfig,
}

impl SourceConfigBuilder {
    pub fn ensembl_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.ensembl_base_url = normalize_base_url(url);
        self
    }

    pub fn eutils_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.eutils_base_url = normalize_base_url(url);
        self
    }

    pub fn genecards_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.genecards_base_url = normalize_base_url(url);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Finish the builder, validating the result
    pub fn build(self) -> Result<SourceConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

//! GeneCards page source
//!
//! GeneCards has no public API, so the gene card page is fetched and the
//! summary block is read out of the HTML.

use async_trait::async_trait;
use genefetch_common::types::fields;
use genefetch_common::{GeneRecord, SourceKind};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

use crate::endpoints;
use crate::error::{IngestError, Result};
use crate::source::GeneSource;

/// The content block holding the gene summary text
pub const SUMMARY_SELECTOR: &str = "div.gc-subsection-inner";

/// Client for GeneCards gene card pages
pub struct GeneCardsClient {
    client: Client,
    base_url: String,
}

impl GeneCardsClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the web summary record for `symbol`
    #[instrument(skip(self), fields(source = %SourceKind::GeneCards))]
    pub async fn card_summary(&self, symbol: &str) -> Result<GeneRecord> {
        let response = self
            .client
            .get(endpoints::genecards_card_url(&self.base_url))
            .query(&endpoints::genecards_card_params(symbol))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Failed to retrieve data from GeneCards.");
            return Ok(GeneRecord::new());
        }

        let html = response.text().await?;
        let summary = extract_summary(&html)?;
        debug!(chars = summary.len(), "GeneCards summary extracted");

        let mut record = GeneRecord::new();
        record.insert(fields::GENECARDS_SUMMARY, summary);
        Ok(record)
    }
}

/// Text of the first summary block in `html`.
///
/// Text nodes are concatenated as they appear, so inline markup adds no
/// separator, then runs of whitespace collapse to a single space.
pub fn extract_summary(html: &str) -> Result<String> {
    let selector = Selector::parse(SUMMARY_SELECTOR).map_err(|e| IngestError::Selector {
        selector: SUMMARY_SELECTOR,
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let block = document
        .select(&selector)
        .next()
        .ok_or(IngestError::Extraction {
            selector: SUMMARY_SELECTOR,
        })?;

    Ok(block
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" "))
}

#[async_trait]
impl GeneSource for GeneCardsClient {
    fn kind(&self) -> SourceKind {
        SourceKind::GeneCards
    }

    async fn fetch(&self, symbol: &str) -> Result<GeneRecord> {
        self.card_summary(symbol).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_summary_collapses_whitespace() {
        let html = r#"
            <html><body>
              <div class="gc-subsection-inner">
                <p>
                  This gene is located on the X chromosome.
                </p>
                <p>  It encodes a <b>demethylase</b>.  </p>
              </div>
            </body></html>"#;

        assert_eq!(
            extract_summary(html).unwrap(),
            "This gene is located on the X chromosome. It encodes a demethylase."
        );
    }

    #[test]
    fn test_extract_summary_inline_markup_adds_no_spaces() {
        let html = r#"<div class="gc-subsection-inner"><p>Encodes <i>KDM6A</i>, a demethylase (<a href="x">UTX</a>).</p></div>"#;

        assert_eq!(
            extract_summary(html).unwrap(),
            "Encodes KDM6A, a demethylase (UTX)."
        );
    }

    #[test]
    fn test_extract_summary_keeps_space_between_blocks() {
        let html = "<div class=\"gc-subsection-inner\"><p>First paragraph.</p>\n<p>Second.</p></div>";

        assert_eq!(extract_summary(html).unwrap(), "First paragraph. Second.");
    }

    #[test]
    fn test_extract_summary_takes_first_block() {
        let html = r#"
            <div class="gc-subsection gc-subsection-inner">first</div>
            <div class="gc-subsection-inner">second</div>"#;

        assert_eq!(extract_summary(html).unwrap(), "first");
    }

    #[test]
    fn test_extract_summary_ignores_other_elements_with_class() {
        let html = r#"
            <span class="gc-subsection-inner">not a div</span>
            <div class="gc-subsection-inner">the summary</div>"#;

        assert_eq!(extract_summary(html).unwrap(), "the summary");
    }

    #[test]
    fn test_missing_block_is_extraction_error() {
        let html = "<html><body><div class=\"gc-other\">changed markup</div></body></html>";

        let err = extract_summary(html).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Extraction {
                selector: SUMMARY_SELECTOR
            }
        ));
    }
}

//! Rendering of gene records for the terminal

use clap::ValueEnum;
use genefetch_common::{FieldValue, GeneRecord};

use crate::aggregator::GeneReport;

/// How the combined record is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object of the combined record
    #[default]
    Json,
    /// One `Key: value` line per field
    Text,
    /// JSON of the full report, including failures and timestamp
    Report,
}

/// Render `report` in the requested format
pub fn render(report: &GeneReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report.record),
        OutputFormat::Report => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(&report.record)),
    }
}

/// Plain text listing; list entries go on indented `- ` lines
pub fn render_text(record: &GeneRecord) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        match value {
            FieldValue::Text(text) => out.push_str(&format!("{}: {}\n", key, text)),
            FieldValue::List(items) if items.is_empty() => {
                out.push_str(&format!("{}: (none)\n", key));
            },
            FieldValue::List(items) => {
                out.push_str(&format!("{}:\n", key));
                for item in items {
                    out.push_str(&format!("  - {}\n", item));
                }
            },
        }
    }
    out
}

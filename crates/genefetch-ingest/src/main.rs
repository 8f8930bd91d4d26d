//! genefetch - gene information aggregator

use anyhow::Result;
use clap::Parser;
use genefetch_common::logging::{init_logging, LogConfig, LogLevel};
use genefetch_ingest::output::{render, OutputFormat};
use genefetch_ingest::{GeneAggregator, SourceConfig};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "genefetch")]
#[command(author, version, about = "Aggregate human gene information from Ensembl, NCBI and GeneCards")]
struct Cli {
    /// Gene symbol to look up (e.g. KDM6A)
    symbol: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Exit with an error if any source failed
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Ensembl REST base URL
    #[arg(long, env = "GENEFETCH_ENSEMBL_URL")]
    ensembl_url: Option<String>,

    /// NCBI E-utilities base URL
    #[arg(long, env = "GENEFETCH_EUTILS_URL")]
    eutils_url: Option<String>,

    /// GeneCards base URL
    #[arg(long, env = "GENEFETCH_GENECARDS_URL")]
    genecards_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, env = "GENEFETCH_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// User agent sent with every request
    #[arg(long, env = "GENEFETCH_USER_AGENT")]
    user_agent: Option<String>,
}

impl Cli {
    /// Source settings from flags or their environment variables, defaults otherwise
    fn source_config(&self) -> Result<SourceConfig> {
        let mut builder = SourceConfig::builder();

        if let Some(url) = &self.ensembl_url {
            builder = builder.ensembl_base_url(url);
        }
        if let Some(url) = &self.eutils_url {
            builder = builder.eutils_base_url(url);
        }
        if let Some(url) = &self.genecards_url {
            builder = builder.genecards_base_url(url);
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout_secs(secs);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(builder.build()?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("genefetch")
        .build()
        // Environment variables take precedence
        .merge_env()?;

    // Flushes the log file when main returns
    let _log_guard = init_logging(&log_config)?;

    let config = cli.source_config()?;
    let aggregator = GeneAggregator::new(&config)?;

    info!(symbol = %cli.symbol, "Fetching gene data");
    let report = aggregator.fetch_gene_data(&cli.symbol).await?;

    println!("{}", render(&report, cli.format)?);

    for failure in &report.failures {
        warn!(source = %failure.source, error = %failure.message, "Source contributed no data");
    }

    if cli.strict && !report.is_complete() {
        anyhow::bail!(
            "{} of {} sources failed for {}",
            report.failures.len(),
            aggregator.source_kinds().len(),
            report.symbol
        );
    }

    Ok(())
}

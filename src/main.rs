//! CLI entry point: prints the current station summary of a GBFS system.
//!
//! With no arguments it queries Oslo Bysykkel and writes a JSON object keyed
//! by `station_id` to stdout. Logs go to stderr and a rolling JSON file.

use anyhow::Result;
use bysykkel::gbfs::{ClientConfig, DEFAULT_DISCOVERY_URL, DEFAULT_LANGUAGE, GbfsClient};
use bysykkel::output::{append_summary_csv, print_json};
use chrono::Utc;
use clap::Parser;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bysykkel")]
#[command(about = "Summarize bike and lock availability from a GBFS feed", long_about = None)]
struct Cli {
    /// Value of the Client-Identifier header (describes you or your organization)
    #[arg(
        long,
        env = "GBFS_CLIENT_IDENTIFIER",
        default_value = "OSLO-ORIGO-APPLICANT-CODE-CHALLENGE"
    )]
    client_identifier: String,

    /// GBFS discovery document (gbfs.json)
    #[arg(long, env = "GBFS_DISCOVERY_URL", default_value = DEFAULT_DISCOVERY_URL)]
    discovery_url: String,

    /// Language section of the discovery document to read feeds from
    #[arg(long, env = "GBFS_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Optional: also append the summary as rows to this CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bysykkel.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bysykkel.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.client_identifier)
        .with_discovery_url(cli.discovery_url)
        .with_language(cli.language);

    let client = GbfsClient::connect(config).await?;
    let summary = client.get_summary_dict().await?;

    if let Some(path) = cli.csv {
        append_summary_csv(&path, summary.values(), Utc::now())?;
        info!(path = %path, rows = summary.len(), "Summary appended to CSV");
    }

    print_json(&summary)?;

    Ok(())
}

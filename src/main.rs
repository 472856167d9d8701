use anyhow::{Context, Result};
use config::ImportConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod models;
mod pipeline;
mod processor;
mod reader;
mod storage;
#[cfg(test)]
mod test_support;

const CONFIG_PATH: &str = "src/configs/import.toml";

fn main() -> Result<()> {
    // Load environment variables (RUST_LOG)
    dotenv::dotenv().ok();

    // Initialize logging; stdout is reserved for the final report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting comic collection import");

    let config = ImportConfig::load_or_default(CONFIG_PATH)
        .context("Failed to load import configuration")?;

    let report = pipeline::run(&config).context("Collection import failed")?;

    let stats = report.stats;
    info!(
        "{} of {} series complete, {} issues owned, {} missing",
        stats.complete, stats.series, stats.owned_issues, stats.missing_issues
    );

    println!(
        "Wrote {} series to {}",
        report.series_written,
        report.output_path.display()
    );

    Ok(())
}

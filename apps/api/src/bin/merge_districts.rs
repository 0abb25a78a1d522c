//! Reconciles the district-keyed source file into the zip-keyed mapping.
//!
//! Safe to re-run: the merge engine fills only empty fields and skips
//! writes when nothing changed.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use advocacy_api::config::Config;
use advocacy_api::merge::transform::{zip_keyed_records, DistrictFile};
use advocacy_api::merge::run_merge;
use advocacy_api::store::FirestoreClient;

#[derive(Parser)]
#[command(about = "Merge district-based representative data into the zip-keyed mapping")]
struct Args {
    /// Path to the district-keyed JSON source file.
    #[arg(long, default_value = "tx_legislative_districts_by_zip.json")]
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = FirestoreClient::new(
        config.firestore_base_url.clone(),
        config.firestore_project_id.clone(),
        config.firestore_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    info!(
        "Starting district data transformation and merge from {}",
        args.input.display()
    );

    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let file: DistrictFile =
        serde_json::from_str(&raw).context("source file is not a district-keyed JSON object")?;

    let (records, _stats) = zip_keyed_records(&file);

    let source_file = args
        .input
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());
    let metadata_collection = Config::metadata_collection(&config.reps_collection);

    let summary = run_merge(
        &store,
        &config.reps_collection,
        &metadata_collection,
        &source_file,
        &records,
    )
    .await?;

    info!("Update summary:");
    info!("  - New zip codes added: {}", summary.created);
    info!("  - Existing zip codes updated: {}", summary.updated);
    info!("  - Zip codes skipped (no changes): {}", summary.skipped);
    info!("  - Total processed: {}", summary.total);

    Ok(())
}

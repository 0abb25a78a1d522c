//! Bulk-uploads a zip-keyed representative file to the document store.
//!
//! Every document is written as-is (plus an upload timestamp); use
//! `merge-districts` for fill-only reconciliation against existing data.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use advocacy_api::config::Config;
use advocacy_api::store::{DocumentStore, FirestoreClient, WriteOp, MAX_BATCH_SIZE};

#[derive(Parser)]
#[command(about = "Upload the zip-keyed Texas representatives file to the store")]
struct Args {
    /// Path to the zip-keyed JSON source file.
    #[arg(long, default_value = "texas_representatives.json")]
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
        "Starting representative data upload from {}",
        args.input.display()
    );

    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let data: BTreeMap<String, Value> =
        serde_json::from_str(&raw).context("source file is not a zip-keyed JSON object")?;

    let total = data.len();
    info!("Total zip codes to process: {total}");

    let mut batch: Vec<WriteOp> = Vec::new();
    let mut processed = 0usize;

    for (zip, zip_data) in data {
        let Some(fields) = zip_data.as_object() else {
            warn!("Skipping {zip}: entry is not an object");
            continue;
        };

        let mut fields = fields.clone();
        fields.insert("lastUpdated".to_string(), json!(Utc::now()));
        batch.push(WriteOp::set(
            &config.reps_collection,
            &zip,
            Value::Object(fields),
        ));
        processed += 1;

        if batch.len() >= MAX_BATCH_SIZE {
            let flushed = std::mem::take(&mut batch);
            let size = flushed.len();
            store.commit(flushed).await?;
            info!("Committed batch of {size} documents. Progress: {processed}/{total}");
        }
    }

    if !batch.is_empty() {
        let size = batch.len();
        store.commit(batch).await?;
        info!("Committed final batch of {size} documents. Progress: {processed}/{total}");
    }

    let metadata_collection = Config::metadata_collection(&config.reps_collection);
    store
        .set_document(
            &metadata_collection,
            "upload_info",
            json!({
                "lastUploadDate": Utc::now(),
                "totalZipCodes": total,
                "uploadedBy": "admin_script",
                "sourceFile": source_file_name(&args.input),
            }),
        )
        .await?;

    info!("Successfully uploaded {processed} zip codes");
    Ok(())
}

fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

//! Uploads the committee contact lists named in a local manifest to the
//! document store.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use advocacy_api::config::Config;
use advocacy_api::contacts::ContactManifest;
use advocacy_api::store::{DocumentStore, FirestoreClient};

#[derive(Parser)]
#[command(about = "Upload contact lists listed in a local manifest to the store")]
struct Args {
    /// Directory holding manifest.json and the contact-list files.
    #[arg(long, default_value = "contacts")]
    dir: PathBuf,
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

    let manifest_path = args.dir.join("manifest.json");
    let manifest_raw = tokio::fs::read_to_string(&manifest_path)
        .await
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: ContactManifest =
        serde_json::from_str(&manifest_raw).context("manifest.json has the wrong shape")?;

    info!(
        "Found {} contact lists to upload",
        manifest.contact_lists.len()
    );

    for file_name in &manifest.contact_lists {
        let list_id = file_name.trim_end_matches(".json");

        let list_path = args.dir.join(file_name);
        let list_raw = tokio::fs::read_to_string(&list_path)
            .await
            .with_context(|| format!("failed to read {}", list_path.display()))?;
        let reps: Value = serde_json::from_str(&list_raw)
            .with_context(|| format!("{file_name} is not valid JSON"))?;
        let rep_count = reps.as_array().map(Vec::len).unwrap_or(0);

        info!("Uploading {list_id} with {rep_count} representatives...");

        store
            .set_document(
                &config.contacts_collection,
                list_id,
                json!({
                    "reps": reps,
                    "repCount": rep_count,
                    "lastUpdated": Utc::now(),
                }),
            )
            .await?;
    }

    let metadata_collection = Config::metadata_collection(&config.contacts_collection);
    store
        .set_document(
            &metadata_collection,
            "upload_info",
            json!({
                "lastUploadDate": Utc::now(),
                "totalLists": manifest.contact_lists.len(),
                "uploadedBy": "admin_script",
                "lists": manifest.contact_lists,
            }),
        )
        .await?;

    info!("All contact lists uploaded successfully");
    Ok(())
}

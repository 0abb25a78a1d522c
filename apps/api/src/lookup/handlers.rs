//! Axum route handlers for zip-code representative lookups.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::lookup::validation::{is_valid_zip, validate_zip_batch};
use crate::models::{Representative, ZipRecord};
use crate::state::AppState;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipLookupRequest {
    pub zip_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchZipLookupRequest {
    pub zip_codes: Option<Vec<String>>,
}

/// One lookup result. Also used per-key in batch responses, where a failed
/// read degrades to `status: "error"` instead of failing sibling keys.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipLookupEntry {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub representatives: Vec<Representative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchZipLookupResponse {
    pub results: BTreeMap<String, ZipLookupEntry>,
    pub queried_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/v1/representatives/lookup
pub async fn handle_zip_lookup(
    State(state): State<AppState>,
    Json(request): Json<ZipLookupRequest>,
) -> Result<Json<ZipLookupEntry>, AppError> {
    let zip = request
        .zip_code
        .filter(|z| !z.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("Zip code is required".to_string()))?;

    if !is_valid_zip(&zip) {
        return Err(AppError::InvalidArgument(
            "Invalid zip code format. Must be 5 digits.".to_string(),
        ));
    }

    let record = fetch_zip_record(state.store.as_ref(), &state.config.reps_collection, &zip)
        .await
        .map_err(AppError::from)?;

    let mut entry = lookup_entry(&zip, record);
    entry.zip_code = Some(zip);
    Ok(Json(entry))
}

/// POST /api/v1/representatives/lookup-batch
///
/// Fans out one store read per zip (the 10-entry cap bounds concurrency)
/// and joins all results before responding. A single failed read becomes
/// an inline error entry for that key only.
pub async fn handle_batch_zip_lookup(
    State(state): State<AppState>,
    Json(request): Json<BatchZipLookupRequest>,
) -> Result<Json<BatchZipLookupResponse>, AppError> {
    let zips = request
        .zip_codes
        .ok_or_else(|| AppError::InvalidArgument("zipCodes must be an array".to_string()))?;

    validate_zip_batch(&zips).map_err(AppError::InvalidArgument)?;

    let handles: Vec<(String, tokio::task::JoinHandle<Result<Option<ZipRecord>, StoreError>>)> =
        zips.iter()
            .map(|zip| {
                let store = Arc::clone(&state.store);
                let collection = state.config.reps_collection.clone();
                let zip_owned = zip.clone();
                let handle = tokio::spawn(async move {
                    fetch_zip_record(store.as_ref(), &collection, &zip_owned).await
                });
                (zip.clone(), handle)
            })
            .collect();

    let mut results = BTreeMap::new();
    for (zip, handle) in handles {
        let entry = match handle.await {
            Ok(Ok(record)) => lookup_entry(&zip, record),
            Ok(Err(e)) => {
                error!("Failed to fetch representatives for {zip}: {e}");
                error_entry()
            }
            Err(e) => {
                error!("Lookup task for {zip} panicked: {e}");
                error_entry()
            }
        };
        results.insert(zip, entry);
    }

    Ok(Json(BatchZipLookupResponse {
        queried_count: zips.len(),
        results,
        timestamp: Utc::now(),
    }))
}

/// Reads and decodes one zip record; `None` when the document is absent.
pub async fn fetch_zip_record(
    store: &dyn DocumentStore,
    collection: &str,
    zip: &str,
) -> Result<Option<ZipRecord>, StoreError> {
    let Some(doc) = store.get_document(collection, zip).await? else {
        return Ok(None);
    };
    let record: ZipRecord =
        serde_json::from_value(doc).map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
    Ok(Some(record))
}

fn lookup_entry(zip: &str, record: Option<ZipRecord>) -> ZipLookupEntry {
    match record {
        Some(record) => ZipLookupEntry {
            status: record.status.unwrap_or_else(|| "success".to_string()),
            zip_code: None,
            message: None,
            count: Some(record.count.unwrap_or(record.representatives.len() as u32)),
            representatives: record.representatives,
            timestamp: record.timestamp,
            last_updated: record.last_updated,
        },
        None => ZipLookupEntry {
            status: "not_found".to_string(),
            zip_code: None,
            message: Some(format!("No representatives found for zip code {zip}")),
            representatives: vec![],
            count: None,
            timestamp: None,
            last_updated: None,
        },
    }
}

fn error_entry() -> ZipLookupEntry {
    ZipLookupEntry {
        status: "error".to_string(),
        zip_code: None,
        message: Some("Failed to fetch representatives data".to_string()),
        representatives: vec![],
        count: None,
        timestamp: None,
        last_updated: None,
    }
}

//! Axum route handler for storage object-finalized notifications.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::contacts::{
    apply_finalized_object, is_contact_list_object, ContactManifest, MANIFEST_DOC_ID,
};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Deserialize)]
pub struct ObjectFinalizedEvent {
    /// Object name within the bucket, e.g. `contacts/0_List.json`.
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResponse {
    pub status: String,
    pub manifest: ContactManifest,
}

/// POST /api/v1/contacts/object-finalized
///
/// Creates the manifest document on first use. Notifications for objects
/// outside the contacts prefix are acknowledged and ignored.
pub async fn handle_object_finalized(
    State(state): State<AppState>,
    Json(event): Json<ObjectFinalizedEvent>,
) -> Result<Json<ManifestResponse>, AppError> {
    let name = event
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("Object name is required".to_string()))?;

    let metadata_collection = Config::metadata_collection(&state.config.contacts_collection);

    let mut manifest = load_manifest(&state, &metadata_collection).await?;

    if !is_contact_list_object(&name) {
        return Ok(Json(ManifestResponse {
            status: "ignored".to_string(),
            manifest,
        }));
    }

    let changed = apply_finalized_object(&mut manifest, &name);
    if changed {
        let fields = serde_json::to_value(&manifest)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
        state
            .store
            .set_document(&metadata_collection, MANIFEST_DOC_ID, fields)
            .await?;
        info!(
            "Manifest updated for {name} ({} lists)",
            manifest.contact_lists.len()
        );
    }

    Ok(Json(ManifestResponse {
        status: if changed { "updated" } else { "unchanged" }.to_string(),
        manifest,
    }))
}

async fn load_manifest(
    state: &AppState,
    metadata_collection: &str,
) -> Result<ContactManifest, AppError> {
    let doc = state
        .store
        .get_document(metadata_collection, MANIFEST_DOC_ID)
        .await?;

    match doc {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| AppError::Store(format!("bad manifest document: {e}"))),
        None => Ok(ContactManifest::default()),
    }
}

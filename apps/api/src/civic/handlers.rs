//! Axum route handler for live civic-information lookups.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::lookup::validation::is_valid_zip;
use crate::models::Representative;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicLookupRequest {
    pub zip_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CivicLookupResponse {
    pub representatives: Vec<Representative>,
    pub count: usize,
}

/// POST /api/v1/civic/lookup
pub async fn handle_civic_lookup(
    State(state): State<AppState>,
    Json(request): Json<CivicLookupRequest>,
) -> Result<Json<CivicLookupResponse>, AppError> {
    let zip = request
        .zip_code
        .filter(|z| !z.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("Zip code is required".to_string()))?;

    if !is_valid_zip(&zip) {
        return Err(AppError::InvalidArgument(
            "Invalid zip code format. Must be 5 digits.".to_string(),
        ));
    }

    let representatives = state.civic.state_legislators(&zip).await?;

    Ok(Json(CivicLookupResponse {
        count: representatives.len(),
        representatives,
    }))
}

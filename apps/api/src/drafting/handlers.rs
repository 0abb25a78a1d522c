//! Axum route handlers for the drafting API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::drafting::generator::{draft_email, draft_subject_lines, EmailDraft, SubjectLines};
use crate::errors::AppError;
use crate::models::{Representative, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailRequest {
    pub user_profile: Option<UserProfile>,
    pub representative: Option<Representative>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLinesRequest {
    pub user_profile: Option<UserProfile>,
}

/// POST /api/v1/emails/generate
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<Json<EmailDraft>, AppError> {
    let profile = request
        .user_profile
        .ok_or_else(|| AppError::InvalidArgument("User profile data is required.".to_string()))?;
    let representative = request.representative.ok_or_else(|| {
        AppError::InvalidArgument("Representative data is required.".to_string())
    })?;

    let draft = draft_email(&state.llm, &profile, &representative).await?;
    Ok(Json(draft))
}

/// POST /api/v1/emails/subject-lines
pub async fn handle_subject_lines(
    State(state): State<AppState>,
    Json(request): Json<SubjectLinesRequest>,
) -> Result<Json<SubjectLines>, AppError> {
    let profile = request
        .user_profile
        .ok_or_else(|| AppError::InvalidArgument("User profile data is required.".to_string()))?;

    let lines = draft_subject_lines(&state.llm, &profile).await?;
    Ok(Json(lines))
}

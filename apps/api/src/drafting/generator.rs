//! Drafting orchestration — submits compiled prompts to the LLM and
//! validates the structured results.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::drafting::compiler::{build_email_prompt, build_subject_lines_prompt};
use crate::drafting::prompts::{EMAIL_SYSTEM, SUBJECT_LINES_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::{Representative, UserProfile};

/// Sampling temperature for email drafts.
pub const EMAIL_TEMPERATURE: f32 = 0.7;
/// Subject-line variants sample hotter to maximize variety.
pub const SUBJECTS_TEMPERATURE: f32 = 1.0;

pub const SUBJECT_COUNT: usize = 5;
/// Extra attempts when the model returns the wrong number of subjects.
const MAX_SUBJECT_RETRIES: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectLines {
    pub subjects: Vec<String>,
}

/// Drafts a full email for one (profile, representative) pair.
pub async fn draft_email(
    llm: &LlmClient,
    profile: &UserProfile,
    representative: &Representative,
) -> Result<EmailDraft, AppError> {
    let prompt = build_email_prompt(profile, representative);

    let draft: EmailDraft = llm
        .call_json(&prompt, EMAIL_SYSTEM, EMAIL_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Email generation failed: {e}")))?;

    info!(
        "Drafted email for {} ({} chars)",
        profile.user_full_name,
        draft.body.len()
    );
    Ok(draft)
}

/// Drafts five subject-line variants for a profile. Retries a bounded
/// number of times when the model returns the wrong shape; never returns a
/// partial list.
pub async fn draft_subject_lines(
    llm: &LlmClient,
    profile: &UserProfile,
) -> Result<SubjectLines, AppError> {
    let prompt = build_subject_lines_prompt(profile);

    for attempt in 0..=MAX_SUBJECT_RETRIES {
        let lines: SubjectLines = llm
            .call_json(&prompt, SUBJECT_LINES_SYSTEM, SUBJECTS_TEMPERATURE)
            .await
            .map_err(|e| AppError::Llm(format!("Subject-line generation failed: {e}")))?;

        if lines.subjects.len() == SUBJECT_COUNT {
            return Ok(lines);
        }

        warn!(
            "Subject-line attempt {}/{} returned {} subjects instead of {SUBJECT_COUNT} — retrying",
            attempt + 1,
            MAX_SUBJECT_RETRIES + 1,
            lines.subjects.len()
        );
    }

    Err(AppError::Llm(format!(
        "Subject-line generation returned the wrong shape after {} attempts",
        MAX_SUBJECT_RETRIES + 1
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_draft_deserializes() {
        let json = r#"{"subject": "Regulate, don't ban", "body": "Dear Representative..."}"#;
        let draft: EmailDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.subject, "Regulate, don't ban");
    }

    #[test]
    fn test_email_draft_missing_body_fails() {
        let json = r#"{"subject": "Regulate, don't ban"}"#;
        assert!(serde_json::from_str::<EmailDraft>(json).is_err());
    }

    #[test]
    fn test_subject_lines_deserializes() {
        let json = r#"{"subjects": ["a", "b", "c", "d", "e"]}"#;
        let lines: SubjectLines = serde_json::from_str(json).unwrap();
        assert_eq!(lines.subjects.len(), SUBJECT_COUNT);
    }

    #[test]
    fn test_subjects_temperature_is_hotter_than_email() {
        assert!(SUBJECTS_TEMPERATURE > EMAIL_TEMPERATURE);
    }
}

//! Constituent profile types as submitted by the client app.
//!
//! The wire format is camelCase to match the existing client payloads.
//! Profiles are request-scoped — nothing in here is ever persisted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The sender's communication tone, chosen in the drafting wizard.
///
/// Unknown wire values deserialize to `Standard` rather than failing —
/// the client may ship new tones before the API knows about them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum PrimaryTone {
    PolicyAnalytical,
    PersonalNarrative,
    CivicPatriotic,
    SolutionOriented,
    UrgentRespectful,
    FriendlyProfessional,
    Bipartisan,
    Inspirational,
    Concerned,
    CommunityVoice,
    #[default]
    Standard,
}

impl From<String> for PrimaryTone {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "policy_analytical" => PrimaryTone::PolicyAnalytical,
            "personal_narrative" => PrimaryTone::PersonalNarrative,
            "civic_patriotic" => PrimaryTone::CivicPatriotic,
            "solution_oriented" => PrimaryTone::SolutionOriented,
            "urgent_respectful" => PrimaryTone::UrgentRespectful,
            "friendly_professional" => PrimaryTone::FriendlyProfessional,
            "bipartisan" => PrimaryTone::Bipartisan,
            "inspirational" => PrimaryTone::Inspirational,
            "concerned" => PrimaryTone::Concerned,
            "community_voice" => PrimaryTone::CommunityVoice,
            _ => PrimaryTone::Standard,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationTone {
    #[serde(default)]
    pub primary_tone: PrimaryTone,
    /// Free-form element keys, e.g. "direct" or "data_driven". Order as
    /// submitted is irrelevant; guidance is composed in a fixed table order.
    #[serde(default)]
    pub personality_elements: Vec<String>,
}

/// A single regulation the sender supports or opposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulationPreference {
    pub regulation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveat: Option<String>,
}

/// The legislative districts the client app resolved for the sender's
/// address. Either set may be empty; the whole block may be absent when
/// district resolution failed client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedDistricts {
    #[serde(default)]
    pub house_districts: HashSet<String>,
    #[serde(default)]
    pub senate_districts: HashSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftingProfile {
    #[serde(default)]
    pub works_in_hemp_industry: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default)]
    pub communication_tone: CommunicationTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ban_impact_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    #[serde(default)]
    pub supported_regulations: Vec<RegulationPreference>,
    #[serde(default)]
    pub opposed_regulations: Vec<RegulationPreference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_full_name: String,
    #[serde(default)]
    pub user_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_districts: Option<AssignedDistricts>,
    #[serde(default)]
    pub intelligent_drafting_profile: DraftingProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_tone_known_value() {
        let tone: PrimaryTone = serde_json::from_str(r#""policy_analytical""#).unwrap();
        assert_eq!(tone, PrimaryTone::PolicyAnalytical);
    }

    #[test]
    fn test_primary_tone_unknown_value_falls_back() {
        let tone: PrimaryTone = serde_json::from_str(r#""sarcastic_limerick""#).unwrap();
        assert_eq!(tone, PrimaryTone::Standard);
    }

    #[test]
    fn test_profile_minimal_payload() {
        let json = serde_json::json!({
            "userFullName": "Maria Gonzales",
            "userLocation": "Austin",
            "intelligentDraftingProfile": {
                "worksInHempIndustry": false,
                "communicationTone": {
                    "primaryTone": "concerned",
                    "personalityElements": []
                }
            }
        });
        let profile: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.user_full_name, "Maria Gonzales");
        assert_eq!(
            profile.intelligent_drafting_profile.communication_tone.primary_tone,
            PrimaryTone::Concerned
        );
        assert!(profile.assigned_districts.is_none());
        assert!(profile.intelligent_drafting_profile.supported_regulations.is_empty());
    }

    #[test]
    fn test_assigned_districts_sets() {
        let json = serde_json::json!({
            "houseDistricts": ["47", "48"],
            "senateDistricts": ["14"]
        });
        let districts: AssignedDistricts = serde_json::from_value(json).unwrap();
        assert!(districts.house_districts.contains("47"));
        assert!(districts.senate_districts.contains("14"));
        assert!(!districts.house_districts.contains("14"));
    }
}

//! Picks the self-identifying phrase a drafted email introduces the sender
//! with.
//!
//! Precedence is a hard anti-fabrication rule: the strongest claims
//! (constituency, industry membership) may only be made when the profile
//! actually supports them. Everything below falls back to phrasing any
//! Texan can truthfully use.

use crate::models::{PrimaryTone, UserProfile};

pub const INDUSTRY_DESCRIPTOR: &str = "a Texas hemp industry professional";
pub const GENERIC_DESCRIPTOR: &str = "a concerned Texan";

/// Selects the sender descriptor. `is_constituent` must come from
/// `constituent::is_constituent` for the representative being written to.
pub fn select_descriptor(profile: &UserProfile, is_constituent: bool) -> String {
    let location = profile.user_location.trim();

    if is_constituent {
        return if location.is_empty() {
            "your constituent from your district".to_string()
        } else {
            format!("your constituent from {location}")
        };
    }

    if profile.intelligent_drafting_profile.works_in_hemp_industry {
        return INDUSTRY_DESCRIPTOR.to_string();
    }

    if let Some(phrase) = tone_descriptor(
        &profile
            .intelligent_drafting_profile
            .communication_tone
            .primary_tone,
    ) {
        return phrase.to_string();
    }

    if !location.is_empty() && !location.eq_ignore_ascii_case("texas") {
        return format!("a {location} resident and concerned Texan");
    }

    GENERIC_DESCRIPTOR.to_string()
}

/// Fixed phrases for the tones that imply a particular self-framing.
/// Other tones fall through to the location-based descriptors.
fn tone_descriptor(tone: &PrimaryTone) -> Option<&'static str> {
    match tone {
        PrimaryTone::PersonalNarrative => {
            Some("a Texan whose daily life is directly affected by this issue")
        }
        PrimaryTone::CivicPatriotic => Some("a proud Texan who believes in our state's values"),
        PrimaryTone::CommunityVoice => {
            Some("a member of the Texas community speaking up for my neighbors")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunicationTone, DraftingProfile};

    fn profile(location: &str, hemp: bool, tone: PrimaryTone) -> UserProfile {
        UserProfile {
            user_full_name: "Test Sender".to_string(),
            user_location: location.to_string(),
            assigned_districts: None,
            intelligent_drafting_profile: DraftingProfile {
                works_in_hemp_industry: hemp,
                communication_tone: CommunicationTone {
                    primary_tone: tone,
                    personality_elements: vec![],
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_constituent_wins_over_everything() {
        let p = profile("Austin", true, PrimaryTone::PersonalNarrative);
        assert_eq!(
            select_descriptor(&p, true),
            "your constituent from Austin"
        );
    }

    #[test]
    fn test_constituent_without_location() {
        let p = profile("", false, PrimaryTone::Standard);
        assert_eq!(
            select_descriptor(&p, true),
            "your constituent from your district"
        );
    }

    #[test]
    fn test_industry_before_tone() {
        let p = profile("Austin", true, PrimaryTone::PersonalNarrative);
        assert_eq!(select_descriptor(&p, false), INDUSTRY_DESCRIPTOR);
    }

    #[test]
    fn test_tone_phrase_before_location() {
        let p = profile("Austin", false, PrimaryTone::CivicPatriotic);
        assert_eq!(
            select_descriptor(&p, false),
            "a proud Texan who believes in our state's values"
        );
    }

    #[test]
    fn test_location_descriptor() {
        let p = profile("Lubbock", false, PrimaryTone::PolicyAnalytical);
        assert_eq!(
            select_descriptor(&p, false),
            "a Lubbock resident and concerned Texan"
        );
    }

    #[test]
    fn test_location_texas_falls_back_to_generic() {
        let p = profile("Texas", false, PrimaryTone::Standard);
        assert_eq!(select_descriptor(&p, false), GENERIC_DESCRIPTOR);
    }

    #[test]
    fn test_generic_fallback() {
        let p = profile("", false, PrimaryTone::Standard);
        assert_eq!(select_descriptor(&p, false), GENERIC_DESCRIPTOR);
    }

    // Anti-fabrication properties

    #[test]
    fn test_never_claims_industry_when_flag_false() {
        for tone in [
            PrimaryTone::PolicyAnalytical,
            PrimaryTone::PersonalNarrative,
            PrimaryTone::Standard,
        ] {
            let p = profile("Dallas", false, tone);
            let descriptor = select_descriptor(&p, false);
            assert!(
                !descriptor.contains("hemp industry"),
                "fabricated industry claim: {descriptor}"
            );
        }
    }

    #[test]
    fn test_never_claims_constituency_when_not_constituent() {
        let p = profile("Dallas", true, PrimaryTone::CommunityVoice);
        let descriptor = select_descriptor(&p, false);
        assert!(
            !descriptor.contains("your constituent"),
            "fabricated constituency claim: {descriptor}"
        );
    }
}

//! Tone and personality-element guidance tables.
//!
//! Guidance is composed from lookup tables rather than inline conditional
//! fragments: the tone maps to one directive line, and personality
//! elements are walked in fixed table order so prompt output is stable
//! regardless of the order the client submitted them in.

use crate::models::PrimaryTone;

/// One directive line per tone. `Standard` doubles as the fallback for
/// tones this build doesn't know about.
pub fn tone_guidance(tone: &PrimaryTone) -> &'static str {
    match tone {
        PrimaryTone::PolicyAnalytical => {
            "Lead with data and policy reasoning; cite concrete figures and keep emotional appeals to a minimum."
        }
        PrimaryTone::PersonalNarrative => {
            "Center the sender's personal story; let the stakes come through in plain, human language."
        }
        PrimaryTone::CivicPatriotic => {
            "Appeal to Texas pride, personal liberty, and skepticism of heavy-handed government."
        }
        PrimaryTone::SolutionOriented => {
            "Emphasize workable regulatory fixes over grievances; propose concrete next steps."
        }
        PrimaryTone::UrgentRespectful => {
            "Convey real urgency about the legislative timeline while staying courteous and measured."
        }
        PrimaryTone::FriendlyProfessional => {
            "Warm but businesslike; approachable without losing professionalism."
        }
        PrimaryTone::Bipartisan => {
            "Frame this as an issue that crosses party lines; avoid partisan language entirely."
        }
        PrimaryTone::Inspirational => {
            "Uplifting and forward-looking; paint the picture of what getting regulation right achieves."
        }
        PrimaryTone::Concerned => {
            "Sincere worry about consequences for families and small businesses; earnest, not alarmist."
        }
        PrimaryTone::CommunityVoice => {
            "Speak as one voice among many neighbors; emphasize the breadth of local support."
        }
        PrimaryTone::Standard => "Professional, respectful, and persuasive.",
    }
}

/// Human-readable tone label for the prompt's style section.
pub fn tone_label(tone: &PrimaryTone) -> &'static str {
    match tone {
        PrimaryTone::PolicyAnalytical => "Policy-analytical",
        PrimaryTone::PersonalNarrative => "Personal narrative",
        PrimaryTone::CivicPatriotic => "Civic-patriotic",
        PrimaryTone::SolutionOriented => "Solution-oriented",
        PrimaryTone::UrgentRespectful => "Urgent but respectful",
        PrimaryTone::FriendlyProfessional => "Friendly-professional",
        PrimaryTone::Bipartisan => "Bipartisan",
        PrimaryTone::Inspirational => "Inspirational",
        PrimaryTone::Concerned => "Concerned",
        PrimaryTone::CommunityVoice => "Community voice",
        PrimaryTone::Standard => "Standard",
    }
}

/// Personality-element guidance, iterated in this order when composing the
/// prompt. Keys match the element strings the client submits.
pub const PERSONALITY_GUIDANCE: &[(&str, &str)] = &[
    (
        "direct",
        "Get to the point quickly; short sentences, no hedging.",
    ),
    (
        "empathetic",
        "Acknowledge the difficulty of the legislator's position before making the ask.",
    ),
    (
        "data_driven",
        "Back every major claim with a figure from the issue context.",
    ),
    (
        "storyteller",
        "Open with a brief concrete scene before the policy argument.",
    ),
    (
        "humble",
        "Ask rather than demand; acknowledge the limits of the sender's expertise.",
    ),
    (
        "local_pride",
        "Name the sender's town or region where it fits naturally.",
    ),
    (
        "optimistic",
        "Close on a hopeful note about what the legislature can get right.",
    ),
];

/// Guidance lines for the elements present in the profile, in fixed table
/// order. Unknown elements are ignored.
pub fn personality_guidance_lines(elements: &[String]) -> Vec<&'static str> {
    PERSONALITY_GUIDANCE
        .iter()
        .filter(|(key, _)| elements.iter().any(|e| e == key))
        .map(|(_, line)| *line)
        .collect()
}

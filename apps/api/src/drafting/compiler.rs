//! Prompt compilation — turns a structured profile (and representative)
//! into the text prompts submitted to the LLM.
//!
//! Both entry points are pure functions so the full prompt text is
//! testable without network access.

use crate::drafting::constituent::is_constituent;
use crate::drafting::descriptor::select_descriptor;
use crate::drafting::names::display_name;
use crate::drafting::prompts::{
    EMAIL_PROMPT_TEMPLATE, ISSUE_CONTEXT, SUBJECT_LINES_PROMPT_TEMPLATE,
};
use crate::drafting::regulations::format_regulations;
use crate::drafting::tone::{personality_guidance_lines, tone_guidance, tone_label};
use crate::models::{Representative, UserProfile};

/// Builds the email-generation prompt for one (profile, representative)
/// pair.
pub fn build_email_prompt(profile: &UserProfile, representative: &Representative) -> String {
    let drafting = &profile.intelligent_drafting_profile;
    let tone = &drafting.communication_tone.primary_tone;

    let constituent = is_constituent(
        profile.assigned_districts.as_ref(),
        representative.district.as_deref(),
    );
    let descriptor = select_descriptor(profile, constituent);

    let personality = personality_guidance_lines(&drafting.communication_tone.personality_elements);
    let personality_block = if personality.is_empty() {
        "- No additional style directives.".to_string()
    } else {
        personality
            .iter()
            .map(|line| format!("- {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    EMAIL_PROMPT_TEMPLATE
        .replace("{recipient_name}", &display_name(&representative.name))
        .replace(
            "{recipient_party}",
            representative.party.as_deref().unwrap_or("Unknown"),
        )
        .replace(
            "{recipient_district}",
            representative.district.as_deref().unwrap_or("Unknown"),
        )
        .replace("{sender_name}", &profile.user_full_name)
        .replace("{sender_descriptor}", &descriptor)
        .replace("{sender_location}", profile.user_location.trim())
        .replace(
            "{occupation}",
            drafting.occupation.as_deref().unwrap_or("Not specified"),
        )
        .replace(
            "{hemp_industry}",
            if drafting.works_in_hemp_industry {
                "Yes"
            } else {
                "No"
            },
        )
        .replace("{tone_label}", tone_label(tone))
        .replace("{tone_guidance}", tone_guidance(tone))
        .replace("{personality_guidance}", &personality_block)
        .replace(
            "{ban_impact}",
            drafting
                .ban_impact_statement
                .as_deref()
                .unwrap_or("Not specified"),
        )
        .replace(
            "{additional_comments}",
            drafting.additional_comments.as_deref().unwrap_or("None"),
        )
        .replace(
            "{supported_regulations}",
            &format_regulations(&drafting.supported_regulations, "supports"),
        )
        .replace(
            "{opposed_regulations}",
            &format_regulations(&drafting.opposed_regulations, "opposes"),
        )
        .replace("{issue_context}", ISSUE_CONTEXT)
}

/// Builds the standalone subject-line prompt for a profile.
pub fn build_subject_lines_prompt(profile: &UserProfile) -> String {
    let tone = &profile
        .intelligent_drafting_profile
        .communication_tone
        .primary_tone;

    // Subject lines are drafted before a recipient is chosen, so the
    // descriptor never claims constituency here.
    let descriptor = select_descriptor(profile, false);

    SUBJECT_LINES_PROMPT_TEMPLATE
        .replace("{sender_name}", &profile.user_full_name)
        .replace("{sender_descriptor}", &descriptor)
        .replace("{tone_label}", tone_label(tone))
        .replace("{tone_guidance}", tone_guidance(tone))
}

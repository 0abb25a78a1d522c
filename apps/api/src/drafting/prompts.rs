// All LLM prompt constants for the drafting module.
// Templates use `{placeholder}` markers filled by the compiler.

/// System prompt for email generation — enforces JSON-only output and the
/// no-fabrication rule.
pub const EMAIL_SYSTEM: &str = "You are an expert constituent-advocacy writer \
    drafting emails from Texans to their state legislators. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent facts about the sender that are not in the prompt.";

/// System prompt for subject-line generation.
pub const SUBJECT_LINES_SYSTEM: &str = "You are an expert email copywriter \
    for constituent advocacy campaigns. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Static issue context included verbatim in every email prompt.
pub const ISSUE_CONTEXT: &str = "\
- The Texas hemp industry supports roughly 53,000 jobs and generates about $8 billion in annual revenue across more than 8,500 licensed retailers.
- Senate Bill 3, a total ban on consumable THC products, was vetoed by Governor Abbott in June 2025; the Legislature is now weighing regulation instead of prohibition.
- Polling shows a majority of Texas voters across parties prefer strict regulation of THC products over an outright ban.";

/// Email prompt template.
/// Replace: {recipient_name}, {recipient_party}, {recipient_district},
///          {sender_name}, {sender_descriptor}, {sender_location},
///          {occupation}, {hemp_industry}, {tone_label}, {tone_guidance},
///          {personality_guidance}, {ban_impact}, {additional_comments},
///          {supported_regulations}, {opposed_regulations}, {issue_context}
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"Generate a professional and respectful email to a Texas legislator about the regulation of consumable hemp THC products.

**Recipient:**
- Name: {recipient_name}
- Party: {recipient_party}
- District: {recipient_district}

**Sender:**
- Name: {sender_name}
- Self-description: {sender_descriptor}
- Location: {sender_location}
- Occupation: {occupation}
- Works in hemp industry: {hemp_industry}

**Communication style:**
- Primary tone: {tone_label} — {tone_guidance}
{personality_guidance}

**Key message points:**
- Personal impact of a THC ban: {ban_impact}
- Additional comments: {additional_comments}
{supported_regulations}
{opposed_regulations}

**Issue context (use these facts verbatim where helpful):**
{issue_context}

**Instructions:**
- Draft a compelling email subject and body.
- Keep it concise and persuasive, tailored to the recipient's party and district where possible.
- Introduce the sender using EXACTLY this phrase: "{sender_descriptor}". Do NOT claim to be a constituent or to work in the hemp industry unless that phrase already says so.
- Weave the sender's personal story and regulation preferences in naturally.
- The email must be ready to send. Do not include any introductory text like "Here is the draft".

Return a JSON object with exactly these fields:
{"subject": "...", "body": "..."}"#;

/// Subject-lines prompt template.
/// Replace: {sender_name}, {sender_descriptor}, {tone_label},
///          {tone_guidance}
pub const SUBJECT_LINES_PROMPT_TEMPLATE: &str = r#"Write exactly 5 distinct email subject lines for a constituent email to a Texas legislator arguing for regulating, not banning, consumable hemp THC products.

Sender: {sender_name}, {sender_descriptor}.
Tone: {tone_label} — {tone_guidance}

Each subject line must be between 50 and 80 characters. Cover these five angles, one subject line each:
1. Economic: the jobs, revenue, and small businesses at stake.
2. Personal: the sender's own stake in the outcome.
3. Regulation over prohibition: the policy contrast.
4. Texas values: liberty and local livelihoods.
5. Urgency: the legislative clock is running.

Return a JSON object with exactly this shape:
{"subjects": ["...", "...", "...", "...", "..."]}"#;

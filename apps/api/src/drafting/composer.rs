//! Draft composition: assembles the four output documents from the input
//! record and the matched offerings.
//!
//! Everything here is pure string work. All four documents are plain text
//! with literal newline separators, no markup.

use serde::{Deserialize, Serialize};

use crate::catalog::Offering;

/// Raw input for one generate action. All fields are free text, pre-trimmed
/// by the shell; only `profile_text` is required for generation to proceed.
#[derive(Debug, Clone, Default)]
pub struct InputRecord {
    pub lead_name: String,
    pub contact_url: String,
    pub profile_text: String,
    pub work_notes: String,
    pub meeting_goal: String,
    pub timeline: String,
}

/// The four generated text artifacts. Always produced together; no partial
/// bundles once validation passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBundle {
    pub summary: String,
    pub pitch: String,
    pub email: String,
    pub short_message: String,
}

const EXPERIENCE_MARKER: &str = "- ";
const HEADLINE_FALLBACK: &str = "Profile headline unavailable.";

/// Assembles the full bundle: same inputs, same four strings, every time.
pub fn compose(input: &InputRecord, offerings: &[Offering]) -> DraftBundle {
    let lead_name = effective_lead_name(&input.lead_name);
    let summary = summarize(&input.profile_text, &input.contact_url);
    let pitch = build_pitch(
        offerings,
        &input.work_notes,
        &input.meeting_goal,
        &input.timeline,
    );
    let email = build_email(lead_name, &summary, &pitch, &input.meeting_goal, &input.timeline);
    let short_message = build_short_message(lead_name, &pitch, &input.meeting_goal);

    DraftBundle {
        summary,
        pitch,
        email,
        short_message,
    }
}

/// Placeholder drafts rendered when no profile text was supplied.
pub fn placeholder_bundle() -> DraftBundle {
    DraftBundle {
        summary: "Paste a profile to generate the summary.".to_string(),
        pitch: "Add profile details to generate a pitch.".to_string(),
        email: "Add profile details to generate an email.".to_string(),
        short_message: "Add profile details to generate a short message.".to_string(),
    }
}

fn effective_lead_name(lead_name: &str) -> &str {
    if lead_name.is_empty() {
        "there"
    } else {
        lead_name
    }
}

fn clean_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn join_or_na(lines: &[&str]) -> String {
    if lines.is_empty() {
        "N/A".to_string()
    } else {
        lines.join(" ")
    }
}

/// Exactly four labeled lines (Headline / Experience highlights / Education /
/// Interests), each falling back to "N/A", plus one optional contact-URL line.
fn summarize(profile_text: &str, contact_url: &str) -> String {
    let lines = clean_lines(profile_text);
    let headline = lines.first().copied().unwrap_or(HEADLINE_FALLBACK);

    let experience: Vec<&str> = lines
        .iter()
        .filter(|line| line.contains(EXPERIENCE_MARKER))
        .take(3)
        .copied()
        .collect();
    let education: Vec<&str> = lines
        .iter()
        .filter(|line| line.to_lowercase().contains("education"))
        .copied()
        .collect();
    let interests: Vec<&str> = lines
        .iter()
        .filter(|line| line.to_lowercase().contains("interests"))
        .copied()
        .collect();

    let mut summary = vec![
        format!("Headline: {headline}"),
        format!("Experience highlights: {}", join_or_na(&experience)),
        format!("Education: {}", join_or_na(&education)),
        format!("Interests: {}", join_or_na(&interests)),
    ];

    if !contact_url.is_empty() {
        summary.push(format!("Profile URL: {contact_url}"));
    }

    summary.join("\n")
}

/// Header, one bullet per offering in catalog order, then three labeled
/// lines with prompting placeholders for blank fields.
fn build_pitch(
    offerings: &[Offering],
    work_notes: &str,
    meeting_goal: &str,
    timeline: &str,
) -> String {
    let mut lines = vec!["Recommended positioning:".to_string()];
    lines.extend(
        offerings
            .iter()
            .map(|offering| format!("• {}: {}", offering.name, offering.value)),
    );
    lines.push(String::new());
    lines.push(format!(
        "Leverage work notes: {}",
        or_placeholder(work_notes, "Add discussion notes to personalize this further.")
    ));
    lines.push(format!(
        "Meeting goal: {}",
        or_placeholder(meeting_goal, "Confirm the desired meeting objective.")
    ));
    lines.push(format!(
        "Target timeline: {}",
        or_placeholder(timeline, "Set a clear date window for outreach.")
    ));
    lines.join("\n")
}

fn build_email(
    lead_name: &str,
    summary: &str,
    pitch: &str,
    meeting_goal: &str,
    timeline: &str,
) -> String {
    let lines = vec![
        format!("Subject: {lead_name}, quick idea to accelerate your revenue operations"),
        String::new(),
        format!("Hi {lead_name},"),
        String::new(),
        "I took a look at your background and pulled a few highlights that stood out:"
            .to_string(),
        summary.to_string(),
        String::new(),
        "Based on that, here is a quick idea from our team that could help:".to_string(),
        pitch.to_string(),
        String::new(),
        format!(
            "If this resonates, could we lock {} {}?",
            or_placeholder(meeting_goal, "a 20-minute discovery call"),
            or_placeholder(timeline, "this week")
        ),
        String::new(),
        "Thanks!".to_string(),
        "[Your Name]".to_string(),
    ];
    lines.join("\n")
}

/// Greeting, fixed intro, the first four lines of the pitch, closing question.
fn build_short_message(lead_name: &str, pitch: &str, meeting_goal: &str) -> String {
    let pitch_preview = pitch.lines().take(4).collect::<Vec<_>>().join("\n");
    let lines = vec![
        format!("Hi {lead_name}, enjoyed reviewing your profile."),
        "One quick idea from our team:".to_string(),
        pitch_preview,
        format!(
            "Would you be open to {} to explore this?",
            or_placeholder(meeting_goal, "a short call")
        ),
    ];
    lines.join("\n")
}

//! Resume generation — the structured input model and its clamping rules.
//!
//! Every inbound field is clamped to a fixed maximum before prompt assembly
//! to keep prompts lean and avoid token overflow. Limits are counted in
//! chars, not bytes.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;

pub const MAX_FULL_NAME: usize = 120;
pub const MAX_CONTACT_INFO: usize = 300;
pub const MAX_TARGET_ROLE: usize = 160;
pub const MAX_SUMMARY: usize = 1200;
pub const MAX_EXPERIENCE: usize = 4000;
pub const MAX_EDUCATION: usize = 1200;
pub const MAX_SKILLS: usize = 1200;

/// Structured resume input from the client.
/// Constructed from the request body, clamped once, consumed to build the
/// prompt, then discarded. Never persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInput {
    pub full_name: String,
    pub contact_info: String,
    pub target_role: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

impl ResumeInput {
    /// Returns a copy with every field clamped to its limit.
    /// A missing summary clamps to the empty string, never None.
    pub fn clamped(&self) -> Self {
        ResumeInput {
            full_name: clamp(&self.full_name, MAX_FULL_NAME),
            contact_info: clamp(&self.contact_info, MAX_CONTACT_INFO),
            target_role: clamp(&self.target_role, MAX_TARGET_ROLE),
            summary: Some(clamp(self.summary.as_deref().unwrap_or(""), MAX_SUMMARY)),
            experience: clamp(&self.experience, MAX_EXPERIENCE),
            education: clamp(&self.education, MAX_EDUCATION),
            skills: clamp(&self.skills, MAX_SKILLS),
        }
    }
}

/// Truncates `text` to at most `max` chars, appending `…` when truncated.
/// A truncated value therefore has char length max+1.
pub fn clamp(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max).collect();
        out.push('…');
        out
    }
}

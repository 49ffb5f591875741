// Prompt constants and builders for resume generation.
// The system instruction shapes output format; the user query carries only
// the clamped candidate data.

use crate::generation::ResumeInput;

/// System instruction sent with every generateContent call.
pub const RESUME_SYSTEM: &str = "You are a world-class professional resume writer. \
    Generate a polished, modern, high-impact resume in clear Markdown only \
    (no extra prose before/after). Rules:\n\
    1) Use '# ' for the full name.\n\
    2) Use '## ' for section headers (Professional Summary, Experience, Education, Skills).\n\
    3) Use '*' bullets for achievements and skills.\n\
    4) Use strong action verbs, quantify results, ensure ATS-friendly keywords, inclusive language.\n\
    5) Keep it concise and professional.\n";

/// Builds the user message from clamped input, one labeled line per field.
pub fn build_user_query(input: &ResumeInput) -> String {
    format!(
        "Generate a resume. Candidate data:\n\
         Full Name: {}\n\
         Contact Information: {}\n\
         Target Role: {}\n\
         Professional Summary: {}\n\
         Work Experience: {}\n\
         Education: {}\n\
         Key Skills: {}\n",
        input.full_name,
        input.contact_info,
        input.target_role,
        input.summary.as_deref().unwrap_or(""),
        input.experience,
        input.education,
        input.skills,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_query_labels_every_field() {
        let input = ResumeInput {
            full_name: "Jane Doe".to_string(),
            contact_info: "jane@x.com".to_string(),
            target_role: "Engineer".to_string(),
            summary: None,
            experience: "5 years at Acme".to_string(),
            education: "BS CS".to_string(),
            skills: "Go, Rust".to_string(),
        };

        let query = build_user_query(&input);
        assert!(query.starts_with("Generate a resume. Candidate data:\n"));
        assert!(query.contains("Full Name: Jane Doe\n"));
        assert!(query.contains("Contact Information: jane@x.com\n"));
        assert!(query.contains("Target Role: Engineer\n"));
        assert!(query.contains("Professional Summary: \n"));
        assert!(query.contains("Work Experience: 5 years at Acme\n"));
        assert!(query.contains("Education: BS CS\n"));
        assert!(query.contains("Key Skills: Go, Rust\n"));
    }
}

//! Serde wire types for the generateContent endpoint.
//!
//! Request field names are snake_case per the v1beta API spec
//! (`system_instruction`, `generation_config`). The response is modeled with
//! optional nested fields so extraction is an explicit typed walk rather than
//! ad hoc dynamic lookups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// A single content turn with an explicit role.
#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A content part may carry text or some other payload (inline data, function
/// calls). Only text parts matter here.
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates all text parts of the first candidate, in order.
    /// Returns None when there is no candidate or no part carries text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut out = String::new();
        let mut found = false;
        for part in parts {
            if let Some(text) = &part.text {
                out.push_str(text);
                found = true;
            }
        }
        found.then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_text_single_part() {
        let response = parse(
            r##"{"candidates":[{"content":{"parts":[{"text":"# Jane Doe"}]}}]}"##,
        );
        assert_eq!(response.text().as_deref(), Some("# Jane Doe"));
    }

    #[test]
    fn test_text_concatenates_parts_of_first_candidate() {
        let response = parse(
            r##"{"candidates":[{"content":{"parts":[{"text":"# Jane"},{"text":" Doe"}]}}]}"##,
        );
        assert_eq!(response.text().as_deref(), Some("# Jane Doe"));
    }

    #[test]
    fn test_text_skips_non_text_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{}},{"text":"hello"}]}}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_text_ignores_later_candidates() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"first"}]}},{"content":{"parts":[{"text":"second"}]}}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("first"));
    }

    #[test]
    fn test_text_no_candidates() {
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), None);
        assert_eq!(parse(r#"{}"#).text(), None);
    }

    #[test]
    fn test_text_no_text_parts() {
        let response = parse(r#"{"candidates":[{"content":{"parts":[{"inlineData":{}}]}}]}"#);
        assert_eq!(response.text(), None);

        let response = parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#);
        assert_eq!(response.text(), None);

        let response = parse(r#"{"candidates":[{}]}"#);
        assert_eq!(response.text(), None);
    }
}

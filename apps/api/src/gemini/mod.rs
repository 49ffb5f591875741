//! Gemini client — the single point of entry for all generative-language API
//! calls in this service.
//!
//! ARCHITECTURAL RULE: No other module may call the provider directly.
//! All provider interactions MUST go through this module.
//!
//! Every call is a single attempt with a fixed per-request timeout. Provider
//! failures are surfaced verbatim to the caller; nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub mod types;

use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SystemInstruction,
};

const GENERATE_TIMEOUT: Duration = Duration::from_secs(90);
const LIST_TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f32 = 0.4;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model not found (requested {model}): {body}")]
    ModelNotFound { model: String, body: String },

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("no text part in response: {body}")]
    NoText { body: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Thin wrapper over a pooled reqwest client, bound to one API key, one model
/// resource name, and one base URL at startup.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Makes one generateContent call and extracts the generated text.
    ///
    /// A 404 is reported separately from other API errors: it almost always
    /// means the configured model name is not valid for this API version.
    pub async fn generate(&self, system: &str, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let request_body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system.to_string(),
                }],
            },
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(GENERATE_TIMEOUT)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(GeminiError::ModelNotFound {
                model: self.model.clone(),
                body,
            });
        }

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        debug!(
            "generateContent succeeded ({} candidates)",
            parsed.candidates.len()
        );

        parsed.text().ok_or(GeminiError::NoText { body })
    }

    /// Lists models available to the configured API key.
    /// Returns the provider's JSON untouched so callers can pick an exact
    /// `name` value for GEMINI_MODEL.
    pub async fn list_models(&self) -> Result<serde_json::Value, GeminiError> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(LIST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

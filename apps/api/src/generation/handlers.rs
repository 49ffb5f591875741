//! Axum route handlers for the resume generation API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{build_user_query, RESUME_SYSTEM};
use crate::generation::ResumeInput;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub markdown: String,
}

/// POST /api/generate
///
/// Clamps the candidate fields, assembles the prompt, and forwards one
/// generateContent call to the provider. The generated Markdown comes back
/// verbatim under `markdown`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<ResumeInput>,
) -> Result<Json<GenerateResponse>, AppError> {
    let input = input.clamped();
    let prompt = build_user_query(&input);

    let markdown = state.gemini.generate(RESUME_SYSTEM, &prompt).await?;

    info!("generated resume for target role '{}'", input.target_role);

    Ok(Json(GenerateResponse { markdown }))
}

/// GET /models
///
/// Raw passthrough of the provider's model list. Useful for picking an exact
/// `name` value for GEMINI_MODEL.
pub async fn handle_list_models(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let models = state.gemini.list_models().await?;
    Ok(Json(models))
}

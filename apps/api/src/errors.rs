use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire envelope is `{ "detail": <string> }`. Provider-side failures map
/// to 502 Bad Gateway; local failures map to 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("model not found: {model}")]
    ModelNotFound { model: String, body: String },

    #[error("provider request failed (status {status})")]
    Provider { status: u16, body: String },

    #[error("empty or malformed provider response")]
    MalformedResponse { body: String },

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GeminiError> for AppError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::ModelNotFound { model, body } => AppError::ModelNotFound { model, body },
            GeminiError::Api { status, body } => AppError::Provider { status, body },
            GeminiError::NoText { body } => AppError::MalformedResponse { body },
            GeminiError::Http(e) => AppError::Internal(e.into()),
            GeminiError::Parse(e) => AppError::Internal(e.into()),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ModelNotFound { .. }
            | AppError::Provider { .. }
            | AppError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `detail` string sent to the client. Provider bodies are attached
    /// verbatim so operators can diagnose provider-side issues directly.
    fn detail(&self) -> String {
        match self {
            AppError::ModelNotFound { model, body } => format!(
                "Model not found for this API version. \
                 Set GEMINI_MODEL to one of the names from GET /models. \
                 Requested: {model}. Provider says: {body}"
            ),
            AppError::Provider { status, body } => {
                format!("Model request failed (status {status}): {body}")
            }
            AppError::MalformedResponse { body } => {
                format!("Empty/malformed response: {body}")
            }
            AppError::Internal(e) => format!("Server error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        tracing::error!("request failed ({status}): {detail}");
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_maps_to_502_with_model_and_body() {
        let err = AppError::ModelNotFound {
            model: "models/gemini-2.0-flash".to_string(),
            body: "unknown model".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        let detail = err.detail();
        assert!(detail.contains("models/gemini-2.0-flash"));
        assert!(detail.contains("unknown model"));
    }

    #[test]
    fn test_provider_500_maps_to_502_not_500() {
        let err = AppError::Provider {
            status: 500,
            body: "internal provider failure".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.detail().contains("internal provider failure"));
    }

    #[test]
    fn test_malformed_response_embeds_body() {
        let err = AppError::MalformedResponse {
            body: r#"{"candidates":[]}"#.to_string(),
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert!(err.detail().contains(r#"{"candidates":[]}"#));
    }

    #[test]
    fn test_local_error_maps_to_500() {
        let err = AppError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail().starts_with("Server error:"));
    }
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the configured model. Never touches the provider, so it stays
/// green even when the provider is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "model": state.config.gemini_model
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gemini::GeminiClient;

    #[tokio::test]
    async fn test_health_reports_model_without_provider_call() {
        // Base URL points at nothing routable; health must still answer.
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "models/gemini-2.0-flash".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        let state = AppState {
            gemini: GeminiClient::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            ),
            config,
        };

        let Json(body) = health_handler(State(state)).await;
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["model"], json!("models/gemini-2.0-flash"));
    }
}

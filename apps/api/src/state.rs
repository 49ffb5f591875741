use crate::config::Config;
use crate::gemini::GeminiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
    pub config: Config,
}

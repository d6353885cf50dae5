use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the configured
/// LaTeX compiler.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "texume-api",
        "compiler": state.config.tectonic_bin,
        "compileTimeoutSecs": state.config.compile_timeout.as_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub mod download;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{editor, latex, render, templates};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template gallery
        .route("/api/templates", get(templates::handlers::handle_list_templates))
        .route("/api/templates/:id", get(templates::handlers::handle_get_template))
        // LaTeX source
        .route("/api/generate", post(latex::handlers::handle_generate))
        .route("/api/export", post(latex::handlers::handle_export))
        // PDF output
        .route("/api/compile", post(render::handlers::handle_compile))
        .route(
            "/api/pdf",
            get(render::handlers::handle_preview_placeholder)
                .post(render::handlers::handle_export_pdf),
        )
        // Editor helpers
        .route("/api/snippets", get(editor::handlers::handle_list_snippets))
        .route("/api/sample", get(editor::handlers::handle_sample))
        .route("/api/format", post(editor::handlers::handle_format))
        .with_state(state)
}

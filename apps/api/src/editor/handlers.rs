//! Axum route handlers for the raw-mode editor helpers.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::editor::{format_code, Snippet, SAMPLE_DOCUMENT, SNIPPETS};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatexCode {
    pub latex_code: String,
}

/// GET /api/snippets
pub async fn handle_list_snippets() -> Json<&'static [Snippet]> {
    Json(SNIPPETS)
}

/// GET /api/sample
pub async fn handle_sample() -> Json<LatexCode> {
    Json(LatexCode {
        latex_code: SAMPLE_DOCUMENT.to_string(),
    })
}

/// POST /api/format
pub async fn handle_format(Json(req): Json<LatexCode>) -> Json<LatexCode> {
    Json(LatexCode {
        latex_code: format_code(&req.latex_code),
    })
}

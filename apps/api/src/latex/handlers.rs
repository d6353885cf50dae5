//! Axum route handlers for LaTeX generation and `.tex` export.

use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::latex::generate;
use crate::latex::source::DocumentRequest;
use crate::models::resume::ResumeData;
use crate::routes::download::{attachment, TEX_CONTENT_TYPE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub resume_data: ResumeData,
    #[serde(default, alias = "templateId")]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub latex: String,
    pub template: String,
}

/// POST /api/generate
///
/// Renders structured data through a template. A missing template is 400,
/// an unknown one 404.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let template = req
        .template
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("template is required".to_string()))?;
    let latex = generate(&req.resume_data, &template, &state.templates)?;
    info!("Generated {} bytes of LaTeX with template '{template}'", latex.len());

    Ok(Json(GenerateResponse {
        success: true,
        latex,
        template,
    }))
}

/// POST /api/export
///
/// The current document as a `.tex` download.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Response, AppError> {
    let source = req.resolve(&state.templates)?;
    let filename = req.attachment_name("resume", "tex");

    info!("Exporting {:?} document as {filename} ({} bytes)", source.mode, source.latex.len());
    Ok(attachment(TEX_CONTENT_TYPE, &filename, source.latex))
}

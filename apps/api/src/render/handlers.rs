//! Axum route handlers for PDF output.

use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::latex::source::{attachment_name, DocumentRequest, EditorMode};
use crate::render::pdf::{self, PdfOptions, RenderedPdf};
use crate::routes::download::{attachment, inline, PDF_CONTENT_TYPE};
use crate::state::AppState;

/// Body of `POST /api/pdf`: the document plus export-dialog options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfRequest {
    #[serde(flatten)]
    pub document: DocumentRequest,
    #[serde(default)]
    pub options: PdfOptions,
}

/// POST /api/compile
///
/// Typesets the current document with the configured LaTeX compiler and
/// streams the PDF back. Compiler diagnostics surface as 422.
pub async fn handle_compile(
    State(state): State<AppState>,
    Json(req): Json<DocumentRequest>,
) -> Result<Response, AppError> {
    let source = req.resolve(&state.templates)?;
    let pdf = state.compiler.compile(&source.latex).await?;
    let filename = req.attachment_name("resume", "pdf");

    info!(
        "Compiled {:?} document with {}: {} bytes as {filename}",
        source.mode,
        state.compiler.name(),
        pdf.len()
    );
    Ok(attachment(PDF_CONTENT_TYPE, &filename, pdf))
}

/// POST /api/pdf
///
/// Hand-drawn PDF that needs no LaTeX installation. Form mode draws the
/// structured data directly; otherwise the LaTeX text is walked line by line.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(req): Json<PdfRequest>,
) -> Result<Response, AppError> {
    let PdfRequest { document, options } = req;
    let filename = attachment_name(
        options.filename.as_deref().or(document.filename.as_deref()),
        "resume",
        "pdf",
    );

    let rendered = match (document.mode, document.resume_data.clone()) {
        (EditorMode::Form, Some(data)) => {
            let palette = match document.template.as_deref() {
                Some(id) => Some(
                    state
                        .templates
                        .lookup(id)
                        .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?
                        .colors,
                ),
                None => None,
            };
            draw(move || pdf::render_resume(&data, palette, &options)).await?
        }
        _ => {
            let source = document.resolve(&state.templates)?;
            draw(move || pdf::render_latex(&source.latex, &options)).await?
        }
    };

    info!("Drew {}-page PDF: {} bytes as {filename}", rendered.pages, rendered.bytes.len());
    Ok(attachment(PDF_CONTENT_TYPE, &filename, rendered.bytes))
}

/// GET /api/pdf
///
/// Placeholder shown in the preview pane before anything is compiled.
pub async fn handle_preview_placeholder() -> Result<Response, AppError> {
    let rendered = draw(pdf::placeholder).await?;
    Ok(inline(PDF_CONTENT_TYPE, "resume.pdf", rendered.bytes))
}

async fn draw<F>(job: F) -> Result<RenderedPdf, AppError>
where
    F: FnOnce() -> Result<RenderedPdf, pdf::PdfError> + Send + 'static,
{
    let rendered = tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF drawing: {e}")))??;
    Ok(rendered)
}

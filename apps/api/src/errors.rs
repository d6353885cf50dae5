use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::latex::GenerateError;
use crate::render::CompileError;
use crate::render::pdf::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Compilation failed: {0}")]
    Compilation(String),

    #[error("LaTeX compiler unavailable: {0}")]
    CompilerUnavailable(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GenerateError> for AppError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::TemplateNotFound(id) => AppError::TemplateNotFound(id),
        }
    }
}

impl From<CompileError> for AppError {
    fn from(e: CompileError) -> Self {
        match e {
            CompileError::NotInstalled { .. } => AppError::CompilerUnavailable(e.to_string()),
            CompileError::Failed { .. } | CompileError::TimedOut { .. } | CompileError::NoOutput => {
                AppError::Compilation(e.to_string())
            }
            CompileError::Io(io) => AppError::Internal(anyhow::Error::new(io)),
        }
    }
}

impl From<PdfError> for AppError {
    fn from(e: PdfError) -> Self {
        match e {
            PdfError::InvalidOptions(msg) => AppError::Validation(msg),
            PdfError::Writer(_) => AppError::Pdf(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::TemplateNotFound(id) => (
                StatusCode::NOT_FOUND,
                "TEMPLATE_NOT_FOUND",
                format!("Template '{id}' not found"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Compilation(msg) => {
                tracing::warn!("Compilation failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "COMPILATION_FAILED",
                    msg.clone(),
                )
            }
            AppError::CompilerUnavailable(msg) => {
                tracing::error!("Compiler unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "COMPILER_UNAVAILABLE",
                    "The LaTeX compiler is not available on this server".to_string(),
                )
            }
            AppError::Pdf(msg) => {
                tracing::error!("PDF error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF_ERROR",
                    "PDF generation failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

//! Resolution of the "current document text" for a request.
//!
//! Form mode runs the generator over structured data; raw mode passes the
//! user's LaTeX through untouched. Every document endpoint (export, compile,
//! hand-drawn PDF) goes through `DocumentRequest::resolve`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::latex::{balance::check_balanced, generate};
use crate::models::resume::ResumeData;
use crate::templates::TemplateRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Structured data rendered through a template.
    Form,
    /// Hand-edited LaTeX, opaque to the service.
    #[default]
    #[serde(alias = "raw")]
    Latex,
}

/// Request body shared by the export, compile and PDF endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRequest {
    #[serde(alias = "latex", alias = "rawText")]
    pub latex_code: Option<String>,
    pub resume_data: Option<ResumeData>,
    #[serde(alias = "templateId")]
    pub template: Option<String>,
    pub mode: EditorMode,
    pub filename: Option<String>,
}

/// The document text a request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub latex: String,
    pub mode: EditorMode,
}

impl DocumentRequest {
    /// Produces the LaTeX source for this request.
    ///
    /// Form mode with resume data requires a known template. Without resume
    /// data the raw text is used, as in raw mode. An empty result is a
    /// validation error.
    pub fn resolve(&self, registry: &TemplateRegistry) -> Result<ResolvedSource, AppError> {
        if let (EditorMode::Form, Some(data)) = (self.mode, &self.resume_data) {
            let template = self
                .template
                .as_deref()
                .ok_or_else(|| AppError::Validation("template is required in form mode".to_string()))?;
            let latex = generate(data, template, registry)?;
            debug!("Resolved form-mode document with template '{template}'");
            return Ok(ResolvedSource {
                latex,
                mode: EditorMode::Form,
            });
        }

        let latex = self.latex_code.clone().unwrap_or_default();
        if latex.trim().is_empty() {
            return Err(AppError::Validation("No LaTeX content to export".to_string()));
        }
        if let Err(e) = check_balanced(&latex) {
            // Raw text is passed through regardless; the compiler reports the details.
            warn!("Raw LaTeX looks structurally incomplete: {e}");
        }
        Ok(ResolvedSource {
            latex,
            mode: EditorMode::Latex,
        })
    }

    /// Download name for the response, forced to end in `.{extension}`.
    pub fn attachment_name(&self, default_stem: &str, extension: &str) -> String {
        attachment_name(self.filename.as_deref(), default_stem, extension)
    }
}

/// Sanitises a client-supplied file name for a `Content-Disposition` header.
///
/// Directory parts, quotes and control characters are dropped. A missing
/// extension is appended; a blank name falls back to `default_stem`.
pub fn attachment_name(requested: Option<&str>, default_stem: &str, extension: &str) -> String {
    let base = requested
        .unwrap_or_default()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != ';')
        .collect();
    let cleaned = cleaned.trim();

    let stem = if cleaned.is_empty() { default_stem } else { cleaned };
    let suffix = format!(".{extension}");
    if stem.to_ascii_lowercase().ends_with(&suffix) {
        stem.to_string()
    } else {
        format!("{stem}{suffix}")
    }
}

//! Axum route handlers for the template gallery.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::templates::registry::{TemplateConfig, TemplateSummary};

/// GET /api/templates
///
/// Lists the built-in templates in gallery order.
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.templates.list().iter().map(TemplateSummary::from).collect())
}

/// GET /api/templates/:id
///
/// Full style descriptor for one template.
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<TemplateConfig>, AppError> {
    state
        .templates
        .lookup(&template_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::TemplateNotFound(template_id))
}

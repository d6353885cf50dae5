use std::sync::Arc;

use crate::config::Config;
use crate::render::Compiler;
use crate::templates::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only afterwards.
    pub templates: Arc<TemplateRegistry>,
    /// Pluggable compiler. Default: TectonicCompiler. Tests use a stub.
    pub compiler: Arc<dyn Compiler>,
}

// Template registry and per-template formatting strategies.

pub mod handlers;
pub mod registry;
pub mod style;

pub use registry::{TemplateConfig, TemplateRegistry};
pub use style::TitleWeight;

// LaTeX generation: escaping, section builders, the document assembler and
// the form/raw source resolution shared by every document endpoint.

pub mod assembler;
pub mod balance;
pub mod escape;
pub mod handlers;
pub mod sections;
pub mod source;

use thiserror::Error;

pub use assembler::generate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),
}

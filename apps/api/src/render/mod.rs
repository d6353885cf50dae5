// Output rendering: the external tectonic compiler, the hand-drawn PDF
// fallback and the Helvetica metrics it lays text out with.
// PDF drawing is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod compile;
pub mod handlers;
pub mod metrics;
pub mod pdf;

pub use compile::{CompileError, Compiler, TectonicCompiler};

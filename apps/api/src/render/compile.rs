//! External LaTeX compilation.
//!
//! The service never typesets anything itself: `TectonicCompiler` writes the
//! source into a fresh temporary directory and runs the `tectonic` binary
//! there. The directory is removed when the job finishes, success or not.
//!
//! Failures are reported to the caller as they happen. Nothing is retried.

use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};
use uuid::Uuid;

/// Lines of compiler output kept in an error message.
const LOG_TAIL_LINES: usize = 20;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("'{binary}' could not be started: {source}")]
    NotInstalled {
        binary: String,
        source: std::io::Error,
    },

    #[error("compiler exited with {status}:\n{log}")]
    Failed { status: String, log: String },

    #[error("compilation timed out after {secs}s")]
    TimedOut { secs: u64 },

    #[error("compiler finished without producing a PDF")]
    NoOutput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns LaTeX source into PDF bytes.
///
/// Held as `Arc<dyn Compiler>` in the app state so tests can swap in a stub.
#[async_trait]
pub trait Compiler: Send + Sync {
    async fn compile(&self, latex: &str) -> Result<Bytes, CompileError>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}

/// Runs the `tectonic` CLI as a child process.
#[derive(Debug, Clone)]
pub struct TectonicCompiler {
    binary: String,
    timeout: Duration,
}

impl TectonicCompiler {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Compiler for TectonicCompiler {
    async fn compile(&self, latex: &str) -> Result<Bytes, CompileError> {
        let job = Uuid::new_v4();
        let workdir = tempfile::Builder::new().prefix("texume-").tempdir()?;
        let tex_path = workdir.path().join("resume.tex");
        tokio::fs::write(&tex_path, latex).await?;

        info!(%job, "Compiling {} bytes of LaTeX with {}", latex.len(), self.binary);

        let mut command = Command::new(&self.binary);
        command
            .arg("--chatter")
            .arg("minimal")
            .arg("--outdir")
            .arg(workdir.path())
            .arg(&tex_path)
            .current_dir(workdir.path())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                warn!(%job, "Compilation timed out after {:?}", self.timeout);
                return Err(CompileError::TimedOut {
                    secs: self.timeout.as_secs(),
                });
            }
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                return Err(CompileError::NotInstalled {
                    binary: self.binary.clone(),
                    source: e,
                })
            }
            Ok(Err(e)) => return Err(CompileError::Io(e)),
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let mut log = String::from_utf8_lossy(&output.stderr).into_owned();
            if log.trim().is_empty() {
                log = String::from_utf8_lossy(&output.stdout).into_owned();
            }
            warn!(%job, "Compiler exited with {}", output.status);
            return Err(CompileError::Failed {
                status: output.status.to_string(),
                log: tail_lines(&log, LOG_TAIL_LINES),
            });
        }

        let pdf = match tokio::fs::read(workdir.path().join("resume.pdf")).await {
            Ok(pdf) => pdf,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CompileError::NoOutput),
            Err(e) => return Err(CompileError::Io(e)),
        };

        info!(%job, "Compiled PDF: {} bytes", pdf.len());
        Ok(Bytes::from(pdf))
    }

    fn name(&self) -> &str {
        &self.binary
    }
}

/// Last `n` non-empty lines of `text`.
fn tail_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines() {
        let log = "a\n\nb\nc\n  \nd\n";
        assert_eq!(tail_lines(log, 2), "c\nd");
        assert_eq!(tail_lines(log, 10), "a\nb\nc\nd");
        assert_eq!(tail_lines("", 3), "");
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let compiler = TectonicCompiler::new(
            "texume-definitely-not-installed",
            Duration::from_secs(5),
        );
        let err = compiler.compile("\\relax").await.unwrap_err();
        assert!(matches!(err, CompileError::NotInstalled { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_without_pdf_is_not_success() {
        // `true` exits 0 and writes nothing.
        let compiler = TectonicCompiler::new("true", Duration::from_secs(5));
        let err = compiler.compile("\\relax").await.unwrap_err();
        assert!(matches!(err, CompileError::NoOutput), "{err:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_a_failure() {
        let compiler = TectonicCompiler::new("false", Duration::from_secs(5));
        let err = compiler.compile("\\relax").await.unwrap_err();
        assert!(matches!(err, CompileError::Failed { .. }), "{err:?}");
    }
}

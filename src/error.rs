//! Error types.
//!
//! - `AppError`: fatal, carries the process exit code (usage errors, output failures)
//! - `ParseError`: recoverable per-file failure; the file is skipped and the run continues

use std::path::PathBuf;

/// Exit code for invalid arguments (bad band, missing input directory).
pub const EXIT_USAGE: u8 = 2;
/// Exit code for failures while writing artifacts.
pub const EXIT_OUTPUT: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(EXIT_OUTPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Why a measurement file could not be turned into a curve.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no [Curve] section")]
    MissingCurveSection,

    #[error("no curve data in [Curve] section")]
    EmptyCurve,

    #[error("line {line}: {reason}")]
    InvalidSample { line: usize, reason: String },
}

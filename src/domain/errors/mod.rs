// Domain errors - Error types for the domain layer

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Source path does not exist
    #[error("No file {}", path.display())]
    NotFound { path: PathBuf },

    /// Media backend could not open the file
    #[error("Could not open video {}: {message}", path.display())]
    OpenFail { path: PathBuf, message: String },

    /// A seek-then-read failed
    #[error("Failed to decode frame {frame}: {message}")]
    DecodeFail { frame: u64, message: String },

    /// Stop frame not after start frame
    #[error("Invalid range selection: stop frame {stop} is not after start frame {start}")]
    InvalidRangeSelection { start: u64, stop: u64 },

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    ConfigFail(String),

    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),

    /// External command could not be started
    #[error("Execution error: {0}")]
    ExecFail(String),

    /// Terminal input or output failed
    #[error("Terminal error: {0}")]
    UiFail(String),
}

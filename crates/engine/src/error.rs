use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File '{}' does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("'{}' is not a regular file", path.display())]
    NotRegularFile { path: PathBuf },

    #[error("Failed to open '{}': {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid max lines value '{value}': {reason}")]
    InvalidCap { value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

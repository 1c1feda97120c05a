// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] count_uniq_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl AppError {
    /// The reader of our stdout went away (`count_uniq -d big.log | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
            Self::Json(err) => err.io_error_kind() == Some(std::io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SenseiError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SenseiError>;

impl SenseiError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SenseiError::Io {
            source,
            path: path.into(),
        }
    }
}

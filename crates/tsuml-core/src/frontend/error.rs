use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a program snapshot.
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid program snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl FrontendError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FrontendError::Io {
            path: path.into(),
            source,
        }
    }
}

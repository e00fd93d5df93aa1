//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::frontend::FrontendError;

/// Errors surfaced by the fallible entry points: loading configuration and
/// loading or writing program snapshots. Translation itself never fails.
#[derive(Debug, Error)]
pub enum TsumlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error("Failed to serialize translation: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TsumlError>;

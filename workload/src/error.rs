//! Workload error types.

use strew_engine::CommandError;
use thiserror::Error;

/// Errors raised while loading a command mix.
#[derive(Debug, Error)]
pub enum MixError {
    #[error("failed to parse mix file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

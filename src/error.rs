use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::ai::AiError;

/// Errors raised while loading a session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML session: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON session: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported session format for {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("unknown criteria preset: {0} (expected dissertation, exercice or oral)")]
    UnknownPreset(String),

    #[error("session has no criteria and no preset")]
    NoCriteria,
}

/// Errors surfaced by a [`FeedbackSource`](crate::feedback::FeedbackSource).
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error("feedback generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl FeedbackError {
    /// Short tag for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ai(e) => e.code(),
            Self::TimedOut(_) => "timeout",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Corrupt state file {}: {source}", .path.display())]
    CorruptState {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot persist {}: {source}", .path.display())]
    Persistence {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No persistent data directory available on this platform")]
    NoDataDir,
}

impl ScoreError {
    /// True when the settings file exists but does not decode.
    /// Callers treat this the same as a first run.
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, ScoreError::CorruptState { .. })
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;

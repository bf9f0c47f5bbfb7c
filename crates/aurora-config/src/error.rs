//! Failures from the RON config file on disk.

use std::path::PathBuf;

/// What went wrong while loading or saving `config.ron`. Read and parse
/// failures carry the offending path so the log line points at the file the
/// user has to fix.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid RON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    /// Serialization of an in-memory config failed; no file is involved.
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),
}

pub type Result<T> = std::result::Result<T, LinkRankError>;

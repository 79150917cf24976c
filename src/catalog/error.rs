use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache path is occupied by something that is not a regular file.
    /// Configuration-class: raised before any fetch is attempted.
    #[error("{0} should not be a directory")]
    NotAFile(PathBuf),

    #[error("failed to fetch version manifest: {0}")]
    Fetch(#[source] FetchError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("malformed manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid release time {value:?}: {source}")]
    InvalidReleaseTime {
        value: String,
        source: chrono::ParseError,
    },
}

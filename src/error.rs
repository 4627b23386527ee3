use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ShowcaseError> = std::result::Result<T, E>;

/// Failures at startup, while reading configuration or theme documents.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid theme: {0}")]
    Theme(#[from] serde_json::Error),
}

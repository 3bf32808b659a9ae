use std::path::PathBuf;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

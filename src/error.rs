use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the viewport
#[derive(Debug, Error)]
pub enum ViewError {
    /// The host windowing system could not create the display window.
    /// Fatal: the host has already been torn down when this is returned.
    #[error("failed to create display window: {0}")]
    WindowCreation(String),

    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("renderer initialization failed: {0}")]
    Renderer(String),
}

pub type Result<T> = std::result::Result<T, ViewError>;

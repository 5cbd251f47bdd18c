use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parameter set '{0}' not found")]
    NotFound(String),
    #[error("Invalid parameter set '{name}': {reason}")]
    InvalidParam { name: String, reason: String },
    #[error("Output directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output stream: {0}")]
    Stream(#[from] std::io::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

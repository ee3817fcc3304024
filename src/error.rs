use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or shaping a data source.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed source '{source_name}': {reason}")]
    Malformed { source_name: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Page image load failures. These never leave the viewer; they become an
/// inline error indicator on the surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("no page at index {0}")]
    NoSuchPage(usize),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("load task aborted")]
    Aborted,
}

#[derive(Error, Debug)]
pub enum JobBoardError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, JobBoardError>;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures reported by the editor/workspace collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("workspace search failed: {0}")]
    Search(String),

    #[error("failed to open {path}: {reason}")]
    OpenFailed { path: PathBuf, reason: String },

    #[error("failed to show {path}: {reason}")]
    ShowFailed { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PairnavError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

use thiserror::Error;

/// Unified error type for dir-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid tag reference: {0}")]
    Format(String),

    #[error("Invalid version: {0}")]
    Version(String),

    #[error("Cannot read directory: {0}")]
    Directory(String),

    #[error("Commit lookup failed: {0}")]
    Vcs(String),

    #[error("Release publishing failed: {0}")]
    Publish(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dir-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a reference format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ReleaseError::Format(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a directory error with context
    pub fn directory(msg: impl Into<String>) -> Self {
        ReleaseError::Directory(msg.into())
    }

    /// Create a version-control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ReleaseError::Vcs(msg.into())
    }

    /// Create a publishing error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        ReleaseError::Publish(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}

impl From<git2::Error> for ReleaseError {
    fn from(err: git2::Error) -> Self {
        ReleaseError::Vcs(err.message().to_string())
    }
}

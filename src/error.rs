use thiserror::Error;

/// Unified error type for simpver operations
#[derive(Error, Debug)]
pub enum SimpverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in simpver
pub type Result<T> = std::result::Result<T, SimpverError>;

impl SimpverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SimpverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SimpverError::Version(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SimpverError::Remote(msg.into())
    }
}

impl From<reqwest::Error> for SimpverError {
    fn from(err: reqwest::Error) -> Self {
        SimpverError::Remote(err.to_string())
    }
}

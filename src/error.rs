use thiserror::Error;

/// Unified error type for ci-version operations
///
/// These are hard failures: a malformed build number, an unparsable base
/// version or an unreadable manifest abort the run before anything is written.
/// Expected resolution failures are carried by [`crate::domain::Resolution`].
#[derive(Error, Debug)]
pub enum CiVersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Build number error: {0}")]
    BuildNumber(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in ci-version
pub type Result<T> = std::result::Result<T, CiVersionError>;

impl CiVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CiVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CiVersionError::Version(msg.into())
    }

    /// Create a build number error with context
    pub fn build_number(msg: impl Into<String>) -> Self {
        CiVersionError::BuildNumber(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        CiVersionError::Manifest(msg.into())
    }
}

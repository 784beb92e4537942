//! Error types for pw-client

/// Result type for Patchwork client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the Patchwork server
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration value is absent
    #[error("{key} is a required Patchwork configuration")]
    MissingConfig { key: &'static str },

    /// The requested resource does not exist upstream
    #[error("Patchwork {resource} {id} not found")]
    NotFound { resource: &'static str, id: u64 },

    /// Transport or HTTP-level failure
    #[error("Patchwork request failed: {0}")]
    Http(#[from] reqwest::Error),
}

//! Error types for pw-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The manifest location is not configured
    #[error("MAINTAINERS_FILE_PATH is not set")]
    MaintainersPathNotSet,

    /// Error from the resolution engine
    #[error(transparent)]
    Maintainers(#[from] pw_maintainers::Error),

    /// Error from the Patchwork client
    #[error(transparent)]
    Client(#[from] pw_client::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

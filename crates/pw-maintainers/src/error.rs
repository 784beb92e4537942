//! Error types for pw-maintainers

use std::path::PathBuf;

/// Result type for pw-maintainers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pw-maintainers operations
///
/// "Not found" conditions (no matching pattern, no tree, no maintainers) are
/// not errors; they are encoded as `None` or empty collections in the return
/// values. The only hard failure in this crate is an unreadable manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The MAINTAINERS file could not be read
    #[error("Failed to read maintainers file at {path}: {source}")]
    ManifestLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

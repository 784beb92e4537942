//! Patchwork connection settings
//!
//! Server, project and token are all required; the CLI sources them from
//! flags or the `PW_SERVER`/`PW_PROJECT`/`PW_TOKEN` environment variables
//! before handing them over.

use crate::error::{Error, Result};

/// Validated Patchwork connection settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL, e.g. `https://patches.dpdk.org/api/1.2`
    pub server: String,
    /// Patchwork project identifier, e.g. `dpdk`
    pub project: String,
    /// Authentication token sent with every request
    pub token: String,
}

impl ClientConfig {
    /// Assemble a config, failing with the missing key's name when a value
    /// is absent or empty.
    pub fn from_parts(
        server: Option<String>,
        project: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            server: required("pw-server", server)?,
            project: required("pw-project", project)?,
            token: required("pw-token", token)?,
        })
    }

    /// The server URL without a trailing slash, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.server.trim_end_matches('/')
    }
}

fn required(key: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingConfig { key }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_complete_config_is_accepted() {
        let config = ClientConfig::from_parts(
            some("https://patches.example.org/api/1.2/"),
            some("dpdk"),
            some("secret"),
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://patches.example.org/api/1.2");
    }

    #[rstest]
    #[case::server(None, Some("dpdk"), Some("secret"), "pw-server")]
    #[case::project(Some("https://x"), None, Some("secret"), "pw-project")]
    #[case::token(Some("https://x"), Some("dpdk"), None, "pw-token")]
    #[case::empty_token(Some("https://x"), Some("dpdk"), Some("  "), "pw-token")]
    fn test_missing_values_name_the_key(
        #[case] server: Option<&str>,
        #[case] project: Option<&str>,
        #[case] token: Option<&str>,
        #[case] expected: &str,
    ) {
        let err = ClientConfig::from_parts(
            server.map(str::to_string),
            project.map(str::to_string),
            token.map(str::to_string),
        )
        .unwrap_err();
        match err {
            Error::MissingConfig { key } => assert_eq!(key, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
}

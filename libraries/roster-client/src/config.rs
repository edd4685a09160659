/// Client configuration
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the records endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Endpoint returning the raw record array
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create a config for the given endpoint, without a timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: None,
        }
    }

    /// Set a whole-request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Environment variables prefixed with `ROSTER_` override file values,
    /// e.g. `ROSTER_BASE_URL` and `ROSTER_REQUEST_TIMEOUT_SECS`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new("http://example.com").with_timeout(5);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_url = \"http://records.test:8080/\"").unwrap();
        writeln!(file, "request_timeout_secs = 12").unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.base_url, "http://records.test:8080/");
        assert_eq!(config.request_timeout_secs, Some(12));
    }

    #[test]
    fn test_load_from_partial_file_uses_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "request_timeout_secs = 3").unwrap();

        let config = ClientConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.request_timeout_secs, Some(3));
        assert!(!config.base_url.is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ClientConfig::load(Some(Path::new("/nonexistent/roster.toml")));
        assert!(result.is_err());
    }
}

//! Content store configuration
//!
//! Configuration can come from a TOML file, from environment variables, or
//! both; the environment always wins for the project identifier so that a
//! checked-in config file can never accidentally point a deployment at the
//! wrong project.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the content store project.
pub const ENV_PROJECT_ID: &str = "FOREMAN_CONTENT_PROJECT_ID";

/// Environment variable naming the dataset within the project.
pub const ENV_DATASET: &str = "FOREMAN_CONTENT_DATASET";

/// Environment variable holding a read token for private datasets.
pub const ENV_TOKEN: &str = "FOREMAN_CONTENT_TOKEN";

/// Environment variable overriding the store API base URL.
pub const ENV_API_URL: &str = "FOREMAN_CONTENT_API_URL";

/// Content store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project identifier. `None` means the store is unconfigured and the
    /// client runs disconnected.
    pub project_id: Option<String>,

    /// Dataset within the project
    pub dataset: String,

    /// API version date used in request paths
    pub api_version: String,

    /// Read token for private datasets
    pub token: Option<String>,

    /// Base URL override (staging mirrors, tests). When unset the URL is
    /// derived from the project identifier. An override alone does not
    /// configure the store.
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
            base_url: None,
            request_timeout_secs: 10,
        }
    }
}

impl StoreConfig {
    /// Build a configuration from environment variables only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a configuration from a TOML file, then layer the environment
    /// on top.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.apply_env();
        Ok(config)
    }

    /// Overlay environment variables onto this configuration.
    pub fn apply_env(&mut self) {
        if let Some(project_id) = non_empty_env(ENV_PROJECT_ID) {
            self.project_id = Some(project_id);
        }
        if let Some(dataset) = non_empty_env(ENV_DATASET) {
            self.dataset = dataset;
        }
        if let Some(token) = non_empty_env(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(base_url) = non_empty_env(ENV_API_URL) {
            self.base_url = Some(base_url);
        }
    }

    /// Whether the store is configured at all.
    ///
    /// Only a project identifier configures the store; a base-URL override
    /// on its own does not, it merely redirects an already-configured
    /// project.
    pub fn is_configured(&self) -> bool {
        self.project_id.is_some()
    }

    /// Resolve the API base URL for the configured project.
    ///
    /// Returns an error only when called while unconfigured; callers check
    /// [`is_configured`](Self::is_configured) first.
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Some(url) = &self.base_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        match &self.project_id {
            Some(project_id) => Ok(format!("https://{}.api.foremancontent.io", project_id)),
            None => Err(Error::Config(
                "content store project id is not set".to_string(),
            )),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Environment mutation is process-global; tests that touch it serialize
    // on this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(ENV_PROJECT_ID);
        std::env::remove_var(ENV_DATASET);
        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_API_URL);
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.project_id.is_none());
        assert_eq!(config.dataset, "production");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_resolve_base_url() {
        let config = StoreConfig {
            project_id: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_base_url().unwrap(),
            "https://abc123.api.foremancontent.io"
        );

        let config = StoreConfig {
            base_url: Some("http://localhost:3333/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_base_url().unwrap(), "http://localhost:3333");
    }

    #[test]
    fn test_base_url_alone_does_not_configure_the_store() {
        let config = StoreConfig {
            base_url: Some("http://localhost:3333".to_string()),
            ..Default::default()
        };
        assert!(!config.is_configured());

        // With a project id the override redirects the derived URL.
        let config = StoreConfig {
            project_id: Some("abc123".to_string()),
            base_url: Some("http://localhost:3333".to_string()),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.resolve_base_url().unwrap(), "http://localhost:3333");
    }

    #[test]
    fn test_resolve_base_url_unconfigured() {
        let config = StoreConfig::default();
        assert!(config.resolve_base_url().is_err());
    }

    #[test]
    fn test_env_overlay() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let config = StoreConfig::from_env();
        assert!(config.project_id.is_none());
        assert_eq!(config.dataset, "production");

        std::env::set_var(ENV_PROJECT_ID, "proj42");
        std::env::set_var(ENV_DATASET, "staging");
        std::env::set_var(ENV_TOKEN, "tok");
        let config = StoreConfig::from_env();
        assert_eq!(config.project_id.as_deref(), Some("proj42"));
        assert_eq!(config.dataset, "staging");
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert!(config.is_configured());

        // Blank values are treated as unset
        std::env::set_var(ENV_PROJECT_ID, "  ");
        std::env::remove_var(ENV_DATASET);
        std::env::remove_var(ENV_TOKEN);
        let config = StoreConfig::from_env();
        assert!(config.project_id.is_none());

        clear_env();
    }

    #[test]
    fn test_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_id = \"filed\"").unwrap();
        writeln!(file, "dataset = \"marketing\"").unwrap();
        writeln!(file, "api_version = \"2024-01-01\"").unwrap();
        writeln!(file, "request_timeout_secs = 5").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.project_id.as_deref(), Some("filed"));
        assert_eq!(config.dataset, "marketing");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_id = [not toml").unwrap();
        assert!(StoreConfig::from_file(file.path()).is_err());
    }
}

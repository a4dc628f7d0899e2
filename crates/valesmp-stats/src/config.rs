//! Configuration loading and typed config structures for the site.
//!
//! The canonical configuration lives in `valesmp-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file with
//! environment-variable overrides for the deployment-sensitive values.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level site configuration.
///
/// Mirrors the structure of `valesmp-config.yaml`. All fields have
/// defaults so the site runs without a config file at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Stats backend connection settings.
    #[serde(default)]
    pub backend: BackendSection,

    /// Server status polling settings.
    #[serde(default)]
    pub status: StatusSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl SiteConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the backend:
    /// - `STATS_API_URL` overrides `backend.base_url`
    /// - `STATS_API_KEY` overrides `backend.api_key`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.backend.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.backend.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Stats backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendSection {
    /// Base URL of the external stats backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token injected into every backend request.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl BackendSection {
    /// Override backend settings with environment variables when set.
    ///
    /// This lets Docker Compose (or any deployment) point the site at a
    /// backend without modifying the YAML config file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STATS_API_URL") {
            self.base_url = val;
        }
        if let Ok(val) = std::env::var("STATS_API_KEY") {
            self.api_key = val;
        }
    }
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
        }
    }
}

/// Server status polling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusSection {
    /// The Minecraft server address queried via mcsrvstat.us.
    #[serde(default = "default_address")]
    pub address: String,

    /// Seconds between status polls. The interval is fixed; consecutive
    /// failures do not back off.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for StatusSection {
    fn default() -> Self {
        Self {
            address: default_address(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "http://velocity-proxy:8080".to_owned()
}

fn default_api_key() -> String {
    "your-api-key".to_owned()
}

fn default_address() -> String {
    "play.valesmp.com".to_owned()
}

const fn default_poll_interval_secs() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.status.poll_interval_secs, 120);
        assert_eq!(config.status.address, "play.valesmp.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8090

backend:
  base_url: "http://stats.test:9000"
  api_key: "secret"

status:
  address: "mc.test.example"
  poll_interval_secs: 30

logging:
  level: "debug"
"#;

        let config = SiteConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.status.address, "mc.test.example");
        assert_eq!(config.status.poll_interval_secs, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "server:\n  port: 4000\n";
        let config = SiteConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Port is overridden
        assert_eq!(config.server.port, 4000);
        // Everything else uses defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.status.poll_interval_secs, 120);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SiteConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("valesmp-config.yaml");
        if path.exists() {
            let config = SiteConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}

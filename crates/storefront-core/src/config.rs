//! Storefront configuration, loaded from `storefront.toml` plus environment overrides.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// The config file `load` reads, if one is named.
pub fn config_path() -> Option<String> {
    env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty())
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

/// Top-level configuration aggregating every section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    pub web: WebConfig,
    pub auth: AuthConfig,
    pub observability: ObservabilityConfig,
}

/// Catalog service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser. Defaults to the local
    /// web client; deployments list their hosted origins here, `"*"` allows any.
    pub allowed_origins: Vec<String>,
    /// Require the session marker on POST/PUT/DELETE.
    pub protect_writes: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            protect_writes: false,
        }
    }
}

/// Web client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the catalog API, including the `/api` prefix.
    pub api_base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

/// Demo credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    /// Simulated verification delay.
    pub latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            latency_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl StorefrontConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Defaults, then the file named by `STOREFRONT_CONFIG`, then `PORT`,
    /// `WEB_PORT` and `API_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// [`load`](Self::load) with variables read through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.api.port = parse_port("PORT", &port)?;
        }
        if let Some(port) = lookup("WEB_PORT") {
            self.web.port = parse_port("WEB_PORT", &port)?;
        }
        if let Some(url) = lookup("API_URL") {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidEnv {
                    key: "API_URL".to_string(),
                    value: url,
                });
            }
            self.web.api_base_url = url;
        }
        Ok(())
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}

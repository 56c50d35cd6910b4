//! Frontend configuration
//!
//! Defaults are embedded as TOML. The API base URL can be pinned at build
//! time with the `FUEL_API_BASE_URL` environment variable; otherwise it is
//! derived from the page location (see `api_utils::api_base`).

use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL, e.g. "https://fuel.example.com/api"
    #[serde(default)]
    pub base_url: Option<String>,
    /// Port of the API when the base is derived from the page location
    pub port: u16,
    pub path_prefix: String,
    pub request_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub notification_ttl_ms: u32,
    /// Rows shown in the dashboard "recent" tables
    pub recent_rows: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    BaseUrl(String),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000
path_prefix = "/api"
request_timeout_ms = 15000

[ui]
notification_ttl_ms = 3000
recent_rows = 5
"#;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 5000,
                path_prefix: "/api".to_string(),
                request_timeout_ms: 15_000,
            },
            ui: UiConfig {
                notification_ttl_ms: 3_000,
                recent_rows: 5,
            },
        }
    }
}

impl ApiConfig {
    /// Base URL for a page served from `protocol//hostname`
    pub fn compose_base(&self, protocol: &str, hostname: &str) -> String {
        if let Some(base) = &self.base_url {
            return base.clone();
        }
        format!("{}//{}:{}{}", protocol, hostname, self.port, self.path_prefix)
    }
}

/// Parse a configuration document and apply the optional base URL override
pub fn parse_config(source: &str, base_url_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(source)?;

    if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::BaseUrl(url.to_string()));
        }
        config.api.base_url = Some(url.trim_end_matches('/').to_string());
    }

    Ok(config)
}

/// Load configuration: embedded defaults plus build-time override
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG, option_env!("FUEL_API_BASE_URL")) {
        Ok(config) => {
            log::info!(
                "config loaded: api base {:?}, port {}, timeout {} ms",
                config.api.base_url,
                config.api.port,
                config.api.request_timeout_ms
            );
            config
        }
        Err(e) => {
            log::warn!("{}; falling back to built-in defaults", e);
            AppConfig::default()
        }
    }
}

/// Process-wide configuration, loaded on first access
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_base_url_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://fuel.example.com/api/")).unwrap();
        assert_eq!(
            config.api.compose_base("http:", "localhost"),
            "https://fuel.example.com/api"
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(
            config.api.compose_base("http:", "10.0.0.7"),
            "http://10.0.0.7:5000/api"
        );
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = parse_config(DEFAULT_CONFIG, Some("fuel.example.com"));
        assert!(matches!(result, Err(ConfigError::BaseUrl(_))));
    }

    #[test]
    fn test_missing_section_rejected() {
        let result = parse_config("[api]\nport = 1\n", None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

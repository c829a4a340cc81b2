use std::{env, fmt, net::SocketAddr};

use crate::interface_adapters::cors::{CorsPolicy, DEFAULT_ALLOWED_ORIGINS};

// Runtime/server constants.

pub const DEFAULT_PORT: u16 = 8080;
pub const PORT_VAR: &str = "PORT";
pub const ALLOWED_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Output format of the operational log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    // Anything other than `json` keeps the human-readable format.
    pub fn from_env() -> Self {
        Self::parse(env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

// Process-wide settings, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "invalid {PORT_VAR} value {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup(PORT_VAR).filter(|value| !value.is_empty()) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => defaults.port,
        };

        let allowed_origins = lookup(ALLOWED_ORIGINS_VAR)
            .map(|value| parse_origins(&value))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.allowed_origins);

        Ok(Self {
            port,
            allowed_origins,
            log_format: LogFormat::parse(lookup(LOG_FORMAT_VAR).as_deref()),
        })
    }

    // Listen on all interfaces.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        CorsPolicy::new(self.allowed_origins.iter().cloned())
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn when_nothing_is_set_then_defaults_apply() {
        let config = config_from(&[]).expect("expected default config");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:5173",
                "http://localhost:5174",
                "http://localhost:3000"
            ]
        );
    }

    #[test]
    fn when_port_is_set_then_it_is_used() {
        let config = config_from(&[("PORT", "9090")]).expect("expected config");

        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address(), SocketAddr::from(([0, 0, 0, 0], 9090)));
    }

    #[test]
    fn when_port_is_empty_then_default_is_used() {
        let config = config_from(&[("PORT", "")]).expect("expected config");

        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn when_port_is_not_a_number_then_returns_invalid_port() {
        assert_eq!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
        assert_eq!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort("70000".to_string()))
        );
    }

    #[test]
    fn when_origins_are_overridden_then_entries_are_trimmed_and_empties_dropped() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://chat.example , ,http://localhost:4000",
        )])
        .expect("expected config");

        assert_eq!(
            config.allowed_origins,
            vec!["https://chat.example", "http://localhost:4000"]
        );
        assert!(config.cors_policy().is_allowed("https://chat.example"));
        assert!(!config.cors_policy().is_allowed("http://localhost:5173"));
    }

    #[test]
    fn when_log_format_is_json_then_json_output_is_selected() {
        let config = config_from(&[("LOG_FORMAT", "json")]).expect("expected config");

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config_from(&[("LOG_FORMAT", "pretty")])
                .expect("expected config")
                .log_format,
            LogFormat::Compact
        );
    }

    #[test]
    fn when_origin_override_is_blank_then_default_list_is_kept() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", " , ")]).expect("expected config");

        assert_eq!(config.allowed_origins, AppConfig::default().allowed_origins);
    }
}

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::errors::{Result, RevenueMonitorError};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_relays")]
    pub relays: Vec<RelayConfig>,

    #[serde(default = "default_record_limit")]
    pub record_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relays: default_relays(),
            record_limit: default_record_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub url: String,

    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl RelayConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_relays() -> Vec<RelayConfig> {
    [
        "https://titanrelay.xyz",
        "https://aestus.live",
        "https://agnostic-relay.net",
        "https://boost-relay.flashbots.net",
        "https://relay.ethgas.com",
        "https://relay.btcs.com",
    ]
    .into_iter()
    .map(RelayConfig::new)
    .collect()
}

fn default_record_limit() -> u32 {
    200
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(15)
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| RevenueMonitorError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| RevenueMonitorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(relays) = std::env::var("RELAY_URLS") {
            config.relays = relays
                .split(',')
                .map(|url| RelayConfig::new(url.trim()))
                .collect();
        }

        if let Ok(limit_str) = std::env::var("RECORD_LIMIT") {
            if let Ok(limit) = limit_str.parse::<u32>() {
                config.record_limit = limit;
            }
        }

        if let Ok(timeout_str) = std::env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout_str.parse::<u64>() {
                for relay in &mut config.relays {
                    relay.request_timeout = Duration::from_secs(secs);
                }
            }
        }

        Ok(config)
    }

    /// Rejects configurations whose relay entries are not absolute URLs
    /// before any request is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.relays.is_empty() {
            return Err(RevenueMonitorError::ConfigError(
                "No relays configured".to_string(),
            ));
        }
        for relay in &self.relays {
            Url::parse(&relay.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_known_relays() {
        let config = Config::default();
        assert_eq!(config.relays.len(), 6);
        assert_eq!(config.record_limit, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn relay_defaults_apply_when_omitted() {
        let config: Config = serde_json::from_str(
            r#"{ "relays": [{ "url": "https://relay.example.org" }] }"#,
        )
        .unwrap();
        assert_eq!(config.relays.len(), 1);
        assert_eq!(config.relays[0].request_timeout, Duration::from_secs(15));
        assert_eq!(config.record_limit, 200);
    }

    #[test]
    fn validate_rejects_relative_urls() {
        let config = Config {
            relays: vec![RelayConfig::new("not-a-url")],
            record_limit: 200,
        };
        assert!(config.validate().is_err());
    }
}

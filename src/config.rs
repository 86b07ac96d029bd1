//! Application configuration management

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scanner::payloads::Payloads;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scanner settings
    pub scanner: ScannerConfig,

    /// Payload, signature and header lists used by the detectors
    pub payloads: Payloads,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Per-request timeout in seconds
    pub request_timeout: u64,

    /// Maximum redirect depth when following redirects
    pub max_redirects: usize,

    /// User agent string
    pub user_agent: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            request_timeout: 10,
            max_redirects: 5,
            user_agent: format!("vscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no path is given
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.request_timeout == 0 {
            return Err(ConfigError::Validation {
                field: "scanner.request_timeout".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.payloads.xss_payloads.is_empty() {
            return Err(ConfigError::Validation {
                field: "payloads.xss_payloads".to_string(),
                reason: "at least one payload is required".to_string(),
            });
        }

        if self.payloads.sqli_payloads.is_empty() {
            return Err(ConfigError::Validation {
                field: "payloads.sqli_payloads".to_string(),
                reason: "at least one payload is required".to_string(),
            });
        }

        Ok(())
    }

    /// Render the default configuration as TOML
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Config::default()).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scanner.request_timeout, 10);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = Config::default_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.scanner.max_redirects, 5);
        assert!(!parsed.payloads.sql_error_patterns.is_empty());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.scanner.request_timeout = 0;
        assert!(config.validate().is_err());
    }
}

//! Error types for vscan
//!
//! Two-tier taxonomy: fatal configuration errors abort a run before any
//! network activity; probe errors are recoverable and absorbed by the
//! detector that hit them.

use thiserror::Error;

/// Fatal configuration errors
///
/// Any of these aborts the scan run with no partial output.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid target URL '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}' (only http and https targets are scannable)")]
    UnsupportedScheme(String),

    #[error("Unknown scan type '{0}' (expected xss, sqli, http, redirect or all)")]
    UnknownScanType(String),

    #[error("Failed to read configuration file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {reason}")]
    Validation { field: String, reason: String },
}

/// Transport-level probe failures
///
/// A received HTTP response, whatever its status code, is never a
/// `ProbeError`. Detectors treat these as "could not test this candidate"
/// and move on.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Request timed out after {timeout_secs}s: {url}")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("Connection failed: {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Transport failure: {url}: {reason}")]
    Transport { url: String, reason: String },
}

impl ConfigError {
    /// User-facing hint for CLI error reporting
    pub fn user_hint(&self) -> String {
        match self {
            ConfigError::InvalidTarget { url, .. } => {
                format!(
                    "'{}' is not a valid target. Use a full URL like https://example.com/page?id=1",
                    url
                )
            }
            ConfigError::UnsupportedScheme(scheme) => {
                format!("Scheme '{}' cannot be scanned. Use an http:// or https:// URL.", scheme)
            }
            ConfigError::UnknownScanType(t) => {
                format!("'{}' is not a known scan type. Valid: xss, sqli, http, redirect, all.", t)
            }
            ConfigError::Read { path, .. } => {
                format!("Could not read '{}'. Check that the file exists and is readable.", path)
            }
            ConfigError::Parse(_) => {
                "The configuration file has invalid syntax. Check for TOML formatting errors.".into()
            }
            ConfigError::Validation { field, reason } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_the_condition() {
        let err = ConfigError::UnknownScanType("lfi".to_string());
        assert!(err.to_string().contains("lfi"));

        let err = ConfigError::UnsupportedScheme("ftp".to_string());
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn probe_error_carries_url() {
        let err = ProbeError::Timeout {
            url: "http://example.com/".to_string(),
            timeout_secs: 10,
        };
        assert!(err.to_string().contains("example.com"));
        assert!(err.to_string().contains("10s"));
    }
}

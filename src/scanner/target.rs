//! Scan target parsing
//!
//! A target is an absolute http/https URL plus its ordered query parameters.
//! Parsing is the single validation point of a scan run; everything after a
//! successful parse operates on an immutable `Target`.

use url::Url;

use crate::error::ConfigError;

/// A parsed, validated scan target
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
    params: Vec<(String, String)>,
}

impl Target {
    /// Parse and validate a target URL
    ///
    /// Fails fast with a `ConfigError` when the URL is not a well-formed
    /// absolute http/https URL. No detector can operate without one.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidTarget {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidTarget {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        let params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Ok(Self { url, params })
    }

    /// The full target URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The target URL as a string
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Ordered query parameters
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Build a probe URL with one parameter's value replaced
    ///
    /// All other parameters keep their original values and order.
    pub fn with_param_value(&self, name: &str, value: &str) -> Url {
        let mut test_url = self.url.clone();
        {
            let mut pairs = test_url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &self.params {
                if k == name {
                    pairs.append_pair(k, value);
                } else {
                    pairs.append_pair(k, v);
                }
            }
        }
        test_url
    }
}

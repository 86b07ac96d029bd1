//! HTTP probe implementation
//!
//! Thin wrapper around reqwest. Every request carries the caller-supplied
//! timeout, and each probe is an independent exchange with no cookie store
//! or connection state shared between requests.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::redirect::Policy;

use super::response::ProbeResponse;
use crate::config::ScannerConfig;
use crate::error::ProbeError;

/// HTTP probe
///
/// Holds two prebuilt clients: one that follows redirects (reflected
/// injection checks need the final rendered page) and one that never does
/// (the redirect detector inspects the 3xx response itself).
pub struct Probe {
    /// Client following redirects up to the configured depth
    following: reqwest::Client,

    /// Client that never follows redirects
    direct: reqwest::Client,

    /// Per-request timeout
    timeout: Duration,
}

impl Probe {
    /// Create a new probe from scanner settings
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout);

        let following = reqwest::Client::builder()
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        let direct = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to create non-redirecting HTTP client")?;

        Ok(Self {
            following,
            direct,
            timeout,
        })
    }

    /// GET a URL, following redirects to the final page
    pub async fn get(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        self.execute(self.following.get(url), url).await
    }

    /// GET a URL without following redirects
    pub async fn get_no_redirect(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        self.execute(self.direct.get(url), url).await
    }

    /// OPTIONS request, used for allowed-method discovery
    pub async fn options(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        self.execute(
            self.direct.request(reqwest::Method::OPTIONS, url),
            url,
        )
        .await
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<ProbeResponse, ProbeError> {
        let start = Instant::now();

        let response = builder
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_error(e, url))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.as_str().to_string(), v.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_error(e, url))?;

        Ok(ProbeResponse {
            status,
            headers,
            body: body.to_vec(),
            url: final_url,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn map_error(&self, error: reqwest::Error, url: &str) -> ProbeError {
        if error.is_timeout() {
            ProbeError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else if error.is_connect() {
            ProbeError::Connect {
                url: url.to_string(),
                reason: error.to_string(),
            }
        } else {
            ProbeError::Transport {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_creation_succeeds_with_defaults() {
        let config = ScannerConfig::default();
        assert!(Probe::new(&config).is_ok());
    }
}

//! Scan engine orchestration
//!
//! Parses the target, resolves the detector selection against the registry,
//! runs each selected detector in turn and merges their findings into one
//! ordered result.

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;

use super::detectors::default_detectors;
use super::findings::{DetectorRun, ScanRun};
use super::target::Target;
use super::{Detector, Selection};
use crate::config::Config;
use crate::error::ConfigError;
use crate::http::Probe;

/// Main scan engine
pub struct ScanEngine {
    probe: Probe,
    detectors: Vec<Box<dyn Detector>>,
}

impl ScanEngine {
    /// Create an engine with the default detector registry
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            probe: Probe::new(&config.scanner)?,
            detectors: default_detectors(&config.payloads),
        })
    }

    /// Create an engine with an explicit detector list
    pub fn with_detectors(probe: Probe, detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { probe, detectors }
    }

    /// Run the selected detectors against a target URL
    ///
    /// Fails fast, before any network activity, when the target is not a
    /// well-formed absolute http/https URL or when the selection matches no
    /// registered detector. Probe failures inside detectors never fail the
    /// run; a run that reaches the network always yields a `ScanRun`.
    pub async fn run(&self, target_url: &str, selection: Selection) -> Result<ScanRun, ConfigError> {
        let target = Target::parse(target_url)?;

        let selected: Vec<&Box<dyn Detector>> = self
            .detectors
            .iter()
            .filter(|d| selection.includes(d.scan_type()))
            .collect();

        if selected.is_empty() {
            return Err(ConfigError::UnknownScanType(selection.as_str().to_string()));
        }

        let started_at = Utc::now();
        let run_start = Instant::now();

        let mut findings = Vec::new();
        let mut detector_runs = Vec::new();

        for detector in selected {
            tracing::info!(detector = detector.name(), "Running detector");
            let detector_start = Instant::now();

            let detector_findings = detector.scan(&self.probe, &target).await;

            let duration_ms = detector_start.elapsed().as_millis() as u64;
            tracing::info!(
                detector = detector.name(),
                findings = detector_findings.len(),
                duration_ms,
                "Detector finished"
            );

            detector_runs.push(DetectorRun {
                detector: detector.name().to_string(),
                scan_type: detector.scan_type(),
                duration_ms,
                findings: detector_findings.len(),
            });

            // Append order is detector-invocation order, then each
            // detector's internal order.
            findings.extend(detector_findings);
        }

        Ok(ScanRun {
            target_url: target.as_str().to_string(),
            selection,
            started_at,
            duration_ms: run_start.elapsed().as_millis() as u64,
            detector_runs,
            findings,
        })
    }

    /// Registered detectors, in invocation order
    pub fn detectors(&self) -> &[Box<dyn Detector>] {
        &self.detectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_target_fails_before_any_network_activity() {
        let engine = ScanEngine::new(&Config::default()).unwrap();

        // No server exists at these URLs; an attempted request would hang or
        // error differently. The parse failure must come back immediately.
        let err = engine.run("ftp://example.com/", Selection::All).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));

        let err = engine.run("not-a-url", Selection::All).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn empty_registry_rejects_any_selection() {
        let probe = Probe::new(&crate::config::ScannerConfig::default()).unwrap();
        let engine = ScanEngine::with_detectors(probe, Vec::new());

        let err = engine
            .run("http://example.com/?id=1", Selection::Xss)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownScanType(_)));
    }

    #[test]
    fn default_engine_registers_four_detectors() {
        let engine = ScanEngine::new(&Config::default()).unwrap();
        assert_eq!(engine.detectors().len(), 4);
    }
}

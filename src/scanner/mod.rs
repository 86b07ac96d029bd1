//! Scanning engine
//!
//! The detector capability contract, the dispatch/aggregation engine and the
//! detector implementations.

pub mod detectors;
pub mod engine;
pub mod findings;
pub mod payloads;
pub mod target;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use engine::ScanEngine;
pub use findings::{DetectorRun, Finding, ScanRun, Severity};
pub use target::Target;

use crate::http::Probe;

/// Detector type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    Xss,
    Sqli,
    Http,
    Redirect,
}

/// Which detectors a run should execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Xss,
    Sqli,
    Http,
    Redirect,
    All,
}

impl Selection {
    /// Whether a detector of the given type is selected
    pub fn includes(&self, scan_type: ScanType) -> bool {
        match self {
            Selection::All => true,
            Selection::Xss => scan_type == ScanType::Xss,
            Selection::Sqli => scan_type == ScanType::Sqli,
            Selection::Http => scan_type == ScanType::Http,
            Selection::Redirect => scan_type == ScanType::Redirect,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Xss => "xss",
            Selection::Sqli => "sqli",
            Selection::Http => "http",
            Selection::Redirect => "redirect",
            Selection::All => "all",
        }
    }
}

/// Capability contract every detector implements
///
/// `scan` is the sole stateful operation and owns a fresh findings
/// accumulation per invocation; detectors carry no mutable state, so calling
/// `scan` repeatedly on one instance never leaks findings across runs.
/// Probe failures are absorbed (the affected candidate is skipped), never
/// surfaced to the engine.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Detector display name, e.g. "XSS Scanner"
    fn name(&self) -> &'static str;

    /// One-line description for help and report output
    fn description(&self) -> &'static str;

    /// Type identifier used for selection filtering
    fn scan_type(&self) -> ScanType;

    /// Run this detector against the target
    async fn scan(&self, probe: &Probe, target: &Target) -> Vec<Finding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_includes_every_type() {
        for scan_type in [ScanType::Xss, ScanType::Sqli, ScanType::Http, ScanType::Redirect] {
            assert!(Selection::All.includes(scan_type));
        }
    }

    #[test]
    fn narrow_selection_includes_only_its_type() {
        assert!(Selection::Sqli.includes(ScanType::Sqli));
        assert!(!Selection::Sqli.includes(ScanType::Xss));
        assert!(!Selection::Redirect.includes(ScanType::Http));
    }
}

//! Vulnerability findings and scan run results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ScanType, Selection};

/// Severity level for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Informational,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Informational => "Informational",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// One reported piece of evidence of a vulnerability
///
/// Immutable once produced. `parameter` is `None` for findings that are not
/// scoped to a query parameter (the policy detector's checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Human-readable vulnerability class, e.g. "XSS (Reflected)"
    #[serde(rename = "type")]
    pub vuln_type: String,

    /// Affected query parameter, if parameter-scoped
    pub parameter: Option<String>,

    /// The injected value or the offending condition
    pub payload: String,

    /// Fully-formed request URL used to trigger the finding
    pub url: String,

    /// HTTP status code of the triggering response
    pub status_code: Option<u16>,

    /// Severity level
    pub severity: Severity,

    /// What was observed and why it matters
    pub description: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(vuln_type: &str, severity: Severity, url: &str) -> Self {
        Self {
            vuln_type: vuln_type.to_string(),
            parameter: None,
            payload: String::new(),
            url: url.to_string(),
            status_code: None,
            severity,
            description: String::new(),
        }
    }

    pub fn with_parameter(mut self, param: &str) -> Self {
        self.parameter = Some(param.to_string());
        self
    }

    pub fn with_payload(mut self, payload: &str) -> Self {
        self.payload = payload.to_string();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }
}

/// Identity and timing for one detector's pass within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorRun {
    /// Detector display name
    pub detector: String,

    /// Detector type identifier
    pub scan_type: ScanType,

    /// Elapsed time for this detector's pass
    pub duration_ms: u64,

    /// Number of findings this detector produced
    pub findings: usize,
}

/// The complete result of invoking one or more detectors against one target
///
/// Findings are appended monotonically in detector-invocation order while
/// the run executes and never mutated afterwards. Zero findings is a valid,
/// successful outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRun {
    /// The scanned target URL
    pub target_url: String,

    /// Which detectors were requested
    pub selection: Selection,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Total elapsed time
    pub duration_ms: u64,

    /// Per-detector identity and timing
    pub detector_runs: Vec<DetectorRun>,

    /// All findings, in detector-invocation then append order
    pub findings: Vec<Finding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_builder_sets_fields() {
        let finding = Finding::new("XSS (Reflected)", Severity::High, "http://example.com/?q=x")
            .with_parameter("q")
            .with_payload("<script>alert(1)</script>")
            .with_status(200)
            .with_description("Unescaped payload reflected in response");

        assert_eq!(finding.vuln_type, "XSS (Reflected)");
        assert_eq!(finding.parameter.as_deref(), Some("q"));
        assert_eq!(finding.status_code, Some(200));
    }

    #[test]
    fn finding_serializes_type_field_name() {
        let finding = Finding::new("Open Redirect", Severity::Medium, "http://example.com/");
        let json = serde_json::to_value(&finding).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("vuln_type").is_none());
        assert_eq!(json["parameter"], serde_json::Value::Null);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Low > Severity::Informational);
    }
}

//! Report generation module
//!
//! Serializes a finished scan run in machine-readable JSON or a standalone
//! HTML document. The reporter reads the run, it never mutates it.

pub mod formats;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scanner::{Finding, ScanRun};

/// Timestamp format used in report output
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Complete scan report
///
/// `total_vulnerabilities` always equals the length of `vulnerabilities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the scan ran
    pub scan_timestamp: String,

    /// The scanned target
    pub target_url: String,

    /// Number of findings
    pub total_vulnerabilities: usize,

    /// All findings, in scan order
    pub vulnerabilities: Vec<Finding>,
}

impl ScanReport {
    /// Build a report from a finished scan run
    pub fn from_run(run: &ScanRun) -> Self {
        Self {
            scan_timestamp: run.started_at.format(TIMESTAMP_FORMAT).to_string(),
            target_url: run.target_url.clone(),
            total_vulnerabilities: run.findings.len(),
            vulnerabilities: run.findings.clone(),
        }
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        formats::json::generate(self)
    }

    /// Export to HTML
    pub fn to_html(&self) -> String {
        formats::html::generate(self)
    }

    /// Save the report to a file in the given format
    pub fn save(&self, path: &Path, format: ReportFormat) -> Result<()> {
        let content = match format {
            ReportFormat::Json => self.to_json()?,
            ReportFormat::Html => self.to_html(),
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Json,
    Html,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }
}

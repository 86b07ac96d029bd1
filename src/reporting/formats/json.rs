//! JSON report generator

use anyhow::Result;

use crate::reporting::ScanReport;

/// Generate a pretty-printed JSON report
pub fn generate(report: &ScanReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{Finding, Severity};

    #[test]
    fn generated_json_parses_back() {
        let report = ScanReport {
            scan_timestamp: "2026-01-01 00:00:00".to_string(),
            target_url: "http://example.com/?id=1".to_string(),
            total_vulnerabilities: 1,
            vulnerabilities: vec![Finding::new(
                "SQLi (Error-based)",
                Severity::Critical,
                "http://example.com/?id='",
            )],
        };

        let json = generate(&report).unwrap();
        let parsed: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_vulnerabilities, 1);
        assert_eq!(parsed.vulnerabilities[0].vuln_type, "SQLi (Error-based)");
    }
}

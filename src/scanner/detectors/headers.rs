//! HTTP misconfiguration detector
//!
//! Parameter-independent policy checks: missing security headers on a GET
//! to the target, and unsafe methods advertised by an OPTIONS response.
//! Findings from this detector carry no parameter.

use async_trait::async_trait;

use crate::http::Probe;
use crate::scanner::findings::{Finding, Severity};
use crate::scanner::payloads::Payloads;
use crate::scanner::target::Target;
use crate::scanner::{Detector, ScanType};

pub struct HttpPolicyDetector {
    payloads: Payloads,
}

impl HttpPolicyDetector {
    pub fn new(payloads: Payloads) -> Self {
        Self { payloads }
    }
}

#[async_trait]
impl Detector for HttpPolicyDetector {
    fn name(&self) -> &'static str {
        "HTTP Misconfig Scanner"
    }

    fn description(&self) -> &'static str {
        "Detects missing security headers and insecure HTTP methods"
    }

    fn scan_type(&self) -> ScanType {
        ScanType::Http
    }

    async fn scan(&self, probe: &Probe, target: &Target) -> Vec<Finding> {
        let mut findings = Vec::new();

        // Security-header check on the full target URL.
        match probe.get(target.as_str()).await {
            Ok(response) => {
                for header in &self.payloads.required_headers {
                    if response.header(header).is_none() {
                        findings.push(
                            Finding::new("HTTP Misconfiguration", Severity::Medium, target.as_str())
                                .with_payload(header)
                                .with_status(response.status)
                                .with_description(&format!(
                                    "Missing security header '{}'",
                                    header
                                )),
                        );
                    }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Header check skipped, target unreachable");
            }
        }

        // Method check via OPTIONS.
        match probe.options(target.as_str()).await {
            Ok(response) => {
                if let Some(allow) = response.header("Allow") {
                    let allowed: Vec<String> = allow
                        .split(',')
                        .map(|m| m.trim().to_uppercase())
                        .collect();

                    for method in &self.payloads.forbidden_methods {
                        if allowed.iter().any(|m| m == &method.to_uppercase()) {
                            findings.push(
                                Finding::new(
                                    "HTTP Misconfiguration",
                                    Severity::Medium,
                                    target.as_str(),
                                )
                                .with_payload(method)
                                .with_status(response.status)
                                .with_description(&format!(
                                    "Insecure HTTP method '{}' is enabled (usable for cross-site tracing)",
                                    method
                                )),
                            );
                        }
                    }

                    // A bare wildcard exposes everything, TRACE included.
                    if allowed.iter().any(|m| m == "*") {
                        findings.push(
                            Finding::new("HTTP Misconfiguration", Severity::Medium, target.as_str())
                                .with_payload("*")
                                .with_status(response.status)
                                .with_description(
                                    "Allow header advertises a wildcard method set",
                                ),
                        );
                    }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Method check skipped, OPTIONS probe failed");
            }
        }

        findings
    }
}

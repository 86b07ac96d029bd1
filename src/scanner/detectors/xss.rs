//! Reflected Cross-Site Scripting (XSS) detector
//!
//! Injects marker payloads into each query parameter and reports when the
//! exact payload comes back verbatim in the response body. This is a
//! signature heuristic, not a browser-accurate DOM or context check: an
//! unescaped reflection is strong evidence but not semantic proof of
//! execution.

use async_trait::async_trait;

use crate::http::Probe;
use crate::scanner::findings::{Finding, Severity};
use crate::scanner::payloads::Payloads;
use crate::scanner::target::Target;
use crate::scanner::{Detector, ScanType};

pub struct XssDetector {
    payloads: Payloads,
}

impl XssDetector {
    pub fn new(payloads: Payloads) -> Self {
        Self { payloads }
    }
}

#[async_trait]
impl Detector for XssDetector {
    fn name(&self) -> &'static str {
        "XSS Scanner"
    }

    fn description(&self) -> &'static str {
        "Detects reflected Cross-Site Scripting (XSS) vulnerabilities"
    }

    fn scan_type(&self) -> ScanType {
        ScanType::Xss
    }

    async fn scan(&self, probe: &Probe, target: &Target) -> Vec<Finding> {
        let mut findings = Vec::new();

        // Reflection needs user-controlled input; a static URL has nothing to test.
        for (param, _) in target.params() {
            for payload in &self.payloads.xss_payloads {
                let test_url = target.with_param_value(param, payload);

                let response = match probe.get(test_url.as_str()).await {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::debug!(param, error = %e, "Skipping XSS probe");
                        continue;
                    }
                };

                // Case-sensitive verbatim match. An entity-encoded reflection
                // will not contain the raw payload and is not reported.
                if response.body_text().contains(payload.as_str()) {
                    findings.push(
                        Finding::new("XSS (Reflected)", Severity::High, test_url.as_str())
                            .with_parameter(param)
                            .with_payload(payload)
                            .with_status(response.status)
                            .with_description(&format!(
                                "Unescaped XSS payload reflected in response for parameter '{}'",
                                param
                            )),
                    );

                    // One finding per vulnerable parameter is enough.
                    break;
                }
            }
        }

        findings
    }
}

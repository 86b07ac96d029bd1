//! Open redirect detector
//!
//! Replaces each query parameter's value with an external canary URL and
//! inspects the raw redirect response without following it. A 3xx status
//! whose Location echoes the canary is an open redirect; any other outcome
//! is simply inapplicable for that parameter.

use async_trait::async_trait;

use crate::http::Probe;
use crate::scanner::findings::{Finding, Severity};
use crate::scanner::payloads::Payloads;
use crate::scanner::target::Target;
use crate::scanner::{Detector, ScanType};

pub struct RedirectDetector {
    payloads: Payloads,
}

impl RedirectDetector {
    pub fn new(payloads: Payloads) -> Self {
        Self { payloads }
    }
}

#[async_trait]
impl Detector for RedirectDetector {
    fn name(&self) -> &'static str {
        "Open Redirect Scanner"
    }

    fn description(&self) -> &'static str {
        "Detects unvalidated redirect vulnerabilities"
    }

    fn scan_type(&self) -> ScanType {
        ScanType::Redirect
    }

    async fn scan(&self, probe: &Probe, target: &Target) -> Vec<Finding> {
        let mut findings = Vec::new();
        let canary = &self.payloads.redirect_canary;

        // Conservative mode: every parameter is a candidate, not just the
        // ones with redirect-looking names.
        for (param, _) in target.params() {
            let test_url = target.with_param_value(param, canary);

            let response = match probe.get_no_redirect(test_url.as_str()).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::debug!(param, error = %e, "Skipping redirect probe");
                    continue;
                }
            };

            // Non-redirect responses are inapplicable, not findings.
            if !response.is_redirect() {
                continue;
            }

            let Some(location) = response.header("Location") else {
                continue;
            };

            if location == canary || location.starts_with(canary.as_str()) {
                let named_hint = if self.payloads.is_redirect_param_name(param) {
                    " (parameter name matches common redirect parameters)"
                } else {
                    ""
                };

                findings.push(
                    Finding::new("Open Redirect", Severity::Medium, test_url.as_str())
                        .with_parameter(param)
                        .with_payload(canary)
                        .with_status(response.status)
                        .with_description(&format!(
                            "Unvalidated redirect: Location header points to the injected external URL{}",
                            named_hint
                        )),
                );
            }
        }

        findings
    }
}

//! SQL injection detector
//!
//! Two independent passes per parameter: an error-based pass that matches
//! vendor error signatures after injecting SQL metacharacters, and a
//! boolean-based pass that compares the responses for an always-true and an
//! always-false condition. The differential check is sensitive to dynamic
//! pages (timestamps, counters, rotating ads); treat boolean findings as
//! leads, not proof.

use async_trait::async_trait;
use regex::Regex;

use crate::http::Probe;
use crate::scanner::findings::{Finding, Severity};
use crate::scanner::payloads::Payloads;
use crate::scanner::target::Target;
use crate::scanner::{Detector, ScanType};

pub struct SqliDetector {
    payloads: Payloads,
}

impl SqliDetector {
    pub fn new(payloads: Payloads) -> Self {
        Self { payloads }
    }

    /// Error-based pass: first signature hit wins for this parameter.
    /// Returns `None` when a probe fails, which skips the parameter.
    async fn error_based_pass(
        &self,
        probe: &Probe,
        target: &Target,
        param: &str,
        patterns: &[(Regex, String)],
    ) -> Option<Option<Finding>> {
        for payload in &self.payloads.sqli_payloads {
            let test_url = target.with_param_value(param, payload);

            let response = match probe.get(test_url.as_str()).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::debug!(param, error = %e, "Skipping parameter on probe failure");
                    return None;
                }
            };

            let body = response.body_text();
            for (pattern, db) in patterns {
                if pattern.is_match(&body) {
                    return Some(Some(
                        Finding::new("SQLi (Error-based)", Severity::Critical, test_url.as_str())
                            .with_parameter(param)
                            .with_payload(payload)
                            .with_status(response.status)
                            .with_description(&format!(
                                "Database error signature detected in response ({})",
                                db
                            )),
                    ));
                }
            }
        }

        Some(None)
    }

    /// Boolean-based pass: inject always-true and always-false conditions
    /// appended to the original value, holding everything else fixed, and
    /// compare the two responses.
    async fn boolean_based_pass(
        &self,
        probe: &Probe,
        target: &Target,
        param: &str,
        original_value: &str,
    ) -> Option<Option<Finding>> {
        let true_value = format!("{}{}", original_value, self.payloads.sqli_true_suffix);
        let false_value = format!("{}{}", original_value, self.payloads.sqli_false_suffix);

        let true_url = target.with_param_value(param, &true_value);
        let false_url = target.with_param_value(param, &false_value);

        let true_resp = match probe.get(true_url.as_str()).await {
            Ok(r) => r,
            Err(_) => return None,
        };
        let false_resp = match probe.get(false_url.as_str()).await {
            Ok(r) => r,
            Err(_) => return None,
        };

        // A status mismatch means the page changed for a different reason;
        // only a materially different body at equal status is differential
        // evidence.
        if true_resp.status != false_resp.status {
            return Some(None);
        }

        let delta = true_resp.body_len().abs_diff(false_resp.body_len());
        if delta > self.payloads.boolean_length_threshold {
            return Some(Some(
                Finding::new("SQLi (Boolean-based)", Severity::High, true_url.as_str())
                    .with_parameter(param)
                    .with_payload(&self.payloads.sqli_true_suffix)
                    .with_status(true_resp.status)
                    .with_description(&format!(
                        "Response differs between always-true and always-false conditions ({} byte delta)",
                        delta
                    )),
            ));
        }

        Some(None)
    }
}

#[async_trait]
impl Detector for SqliDetector {
    fn name(&self) -> &'static str {
        "SQLi Scanner"
    }

    fn description(&self) -> &'static str {
        "Detects SQL injection vulnerabilities (error-based and boolean-based)"
    }

    fn scan_type(&self) -> ScanType {
        ScanType::Sqli
    }

    async fn scan(&self, probe: &Probe, target: &Target) -> Vec<Finding> {
        let mut findings = Vec::new();
        let patterns = self.payloads.compiled_sql_patterns();

        for (param, original_value) in target.params() {
            match self.error_based_pass(probe, target, param, &patterns).await {
                // Transport failure: skip this parameter entirely.
                None => continue,
                Some(Some(finding)) => findings.push(finding),
                Some(None) => {}
            }

            match self
                .boolean_based_pass(probe, target, param, original_value)
                .await
            {
                None => continue,
                Some(Some(finding)) => findings.push(finding),
                Some(None) => {}
            }
        }

        findings
    }
}

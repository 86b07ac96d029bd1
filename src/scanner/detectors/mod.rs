//! Detector implementations
//!
//! New detectors implement the [`Detector`](crate::scanner::Detector) trait
//! and register in [`default_detectors`]; the engine consults that list at
//! startup, so there is no process-wide registry state.

mod headers;
mod redirect;
mod sqli;
mod xss;

pub use headers::HttpPolicyDetector;
pub use redirect::RedirectDetector;
pub use sqli::SqliDetector;
pub use xss::XssDetector;

use super::payloads::Payloads;
use super::Detector;

/// Build the full detector registry
///
/// Registration order is also invocation and report order.
pub fn default_detectors(payloads: &Payloads) -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(XssDetector::new(payloads.clone())),
        Box::new(SqliDetector::new(payloads.clone())),
        Box::new(HttpPolicyDetector::new(payloads.clone())),
        Box::new(RedirectDetector::new(payloads.clone())),
    ]
}

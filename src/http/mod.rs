//! HTTP probe module
//!
//! Issues the bounded-timeout GET/OPTIONS requests detectors use to test
//! hypotheses against a target.

mod probe;
mod response;

pub use probe::Probe;
pub use response::ProbeResponse;

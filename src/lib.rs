//! vscan - pluggable web vulnerability scanner
//!
//! The scanning engine: an HTTP probe, a detector capability contract, four
//! detector implementations (reflected XSS, error/boolean SQLi, HTTP policy,
//! open redirect) and the dispatcher that runs them against a target and
//! merges their findings. Report serialization lives in [`reporting`].

pub mod config;
pub mod error;
pub mod http;
pub mod reporting;
pub mod scanner;

//! Report output formats

pub mod html;
pub mod json;

// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;
pub mod log;
pub mod url;

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

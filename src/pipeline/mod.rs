// src/pipeline/mod.rs

//! Pipeline entry points for scraper operations.
//!
//! - `run_discover`: List department pages from the catalog index
//! - `run_scraper`: Discover, extract and write the course list

pub mod discover;
pub mod scrape;

pub use discover::run_discover;
pub use scrape::{RunReport, run_scraper};

// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod course;
mod selectors;

// Re-export all public types
pub use config::{CatalogConfig, Config, HttpConfig, LoggingConfig, OutputConfig};
pub use course::{CourseRecord, DepartmentLink};
pub use selectors::CatalogSelectors;

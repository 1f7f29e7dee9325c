// src/storage/mod.rs

//! Storage abstractions for the scraped course list.
//!
//! A run produces a single flat file. When nothing was scraped, backends
//! write nothing at all rather than an empty or header-only file.

pub mod csv_report;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CourseRecord;

// Re-export for convenience
pub use csv_report::CsvReport;

/// Result of a storage write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Records were written to `path`
    Written { path: PathBuf, rows: usize },
    /// There were no records, so nothing was written
    Skipped,
}

/// Trait for course list storage backends.
#[async_trait]
pub trait CourseStorage: Send + Sync {
    /// Write every course, in order. An empty slice must not create output.
    async fn write_courses(&self, courses: &[CourseRecord]) -> Result<WriteOutcome>;
}

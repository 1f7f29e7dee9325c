// src/storage/csv_report.rs

//! CSV course list on the local filesystem.
//!
//! Every field, header included, is wrapped in quotes:
//!
//! ```text
//! "Course Code","Title","Credits","Description","College"
//! "CS-101","Intro to Programming","3.0","...","Computer Science"
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use csv::{QuoteStyle, WriterBuilder};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::CourseRecord;
use crate::storage::{CourseStorage, WriteOutcome};

/// Local CSV report backend.
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    /// Create a report that writes to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Render the courses as fully quoted CSV, header first.
    fn render(courses: &[CourseRecord]) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(Vec::new());

        for course in courses {
            writer.serialize(course)?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CourseStorage for CsvReport {
    async fn write_courses(&self, courses: &[CourseRecord]) -> Result<WriteOutcome> {
        if courses.is_empty() {
            return Ok(WriteOutcome::Skipped);
        }

        let bytes = Self::render(courses)?;
        self.write_bytes(&bytes).await?;

        Ok(WriteOutcome::Written {
            path: self.path.clone(),
            rows: courses.len(),
        })
    }
}

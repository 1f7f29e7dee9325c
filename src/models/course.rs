// src/models/course.rs

//! Course record and department link data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A course scraped from a department listing page.
///
/// Field order matches the CSV column order of the course list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecord {
    /// Normalized course code (e.g., "CS-101")
    #[serde(rename = "Course Code")]
    pub code: String,

    /// Course title
    #[serde(rename = "Title")]
    pub title: String,

    /// Free-text credit description (e.g., "3.0", "0.5-12.0")
    #[serde(rename = "Credits")]
    pub credits: String,

    /// Catalog description (empty string if absent)
    #[serde(rename = "Description")]
    pub description: String,

    /// Offering college or department (empty string if absent)
    #[serde(rename = "College")]
    pub department: String,
}

impl CourseRecord {
    /// Normalize a raw course code by joining its whitespace-separated parts with `-`.
    ///
    /// # Examples
    /// ```
    /// use catalog_scraper::models::CourseRecord;
    ///
    /// assert_eq!(CourseRecord::normalize_code("CS 101"), "CS-101");
    /// assert_eq!(CourseRecord::normalize_code("CS\u{a0}\u{a0}101"), "CS-101");
    /// ```
    pub fn normalize_code(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join("-")
    }
}

/// Absolute URL of a department listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentLink(String);

impl DepartmentLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code() {
        assert_eq!(CourseRecord::normalize_code("CS 101"), "CS-101");
        assert_eq!(CourseRecord::normalize_code("  MATH   121 "), "MATH-121");
        assert_eq!(CourseRecord::normalize_code("ENGL"), "ENGL");
        assert_eq!(CourseRecord::normalize_code(""), "");
    }

    #[test]
    fn test_department_link_display() {
        let link = DepartmentLink::new("https://example.com/a/");
        assert_eq!(link.to_string(), "https://example.com/a/");
        assert_eq!(link.as_str(), "https://example.com/a/");
    }
}

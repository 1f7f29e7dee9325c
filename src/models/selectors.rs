// src/models/selectors.rs

//! CSS selectors describing the catalog page structure.

use serde::{Deserialize, Serialize};

/// CSS selectors for the catalog index and department pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSelectors {
    /// Anchors considered on the index page
    pub link_selector: String,

    /// One element per course on a department page
    pub block_selector: String,

    /// Title element within a course block
    pub title_selector: String,

    /// Labeled spans within the title (code first, then title)
    pub title_span_selector: String,

    /// Description element within a course block
    pub description_selector: String,

    /// Bold elements scanned for the department label
    pub label_selector: String,

    /// Literal text marking the department label
    pub department_marker: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            link_selector: "a[href]".to_string(),
            block_selector: "div.courseblock".to_string(),
            title_selector: "p.courseblocktitle".to_string(),
            title_span_selector: "span.text".to_string(),
            description_selector: "p.courseblockdesc".to_string(),
            label_selector: "b".to_string(),
            department_marker: "College/Department:".to_string(),
        }
    }
}

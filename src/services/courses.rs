// src/services/courses.rs

//! Course extraction service.
//!
//! Fetches department listing pages and turns their course blocks into
//! [`CourseRecord`]s.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{CourseRecord, DepartmentLink};
use crate::services::PageSelectors;
use crate::utils::http::PageSource;
use crate::utils::log;
use crate::utils::normalize_whitespace;

/// Word removed from the residual title text when deriving credits.
const CREDITS_WORD: &str = "Credits";

/// Courses parsed from one department page.
#[derive(Debug, Default)]
pub struct PageCourses {
    pub courses: Vec<CourseRecord>,
    /// The page could not be retrieved
    pub failed: bool,
}

/// Service for extracting courses from department pages.
pub struct CourseExtractor<'a> {
    source: &'a dyn PageSource,
    selectors: &'a PageSelectors,
}

impl<'a> CourseExtractor<'a> {
    /// Create a new course extractor.
    pub fn new(source: &'a dyn PageSource, selectors: &'a PageSelectors) -> Self {
        Self { source, selectors }
    }

    /// Fetch one department page and parse its courses.
    ///
    /// A failed retrieval is reported with the URL and status and yields no
    /// courses.
    pub async fn extract(&self, link: &DepartmentLink) -> PageCourses {
        match self.try_extract(link).await {
            Ok(courses) => PageCourses {
                courses,
                failed: false,
            },
            Err(AppError::Status { url, status }) => {
                log::warn(&format!("Failed to retrieve {url} (status {status})"));
                PageCourses {
                    courses: Vec::new(),
                    failed: true,
                }
            }
            Err(e) => {
                log::warn(&format!("Failed to retrieve {link}: {e}"));
                PageCourses {
                    courses: Vec::new(),
                    failed: true,
                }
            }
        }
    }

    /// Fetch one department page, propagating retrieval errors.
    pub async fn try_extract(&self, link: &DepartmentLink) -> Result<Vec<CourseRecord>> {
        let page = self.source.fetch(link.as_str()).await?;
        let courses = parse_courses(&page.body, self.selectors);
        log::debug(&format!("Parsed {} course(s) from {}", courses.len(), page.url));
        Ok(courses)
    }
}

/// Parse every course block of a department page, in document order.
///
/// Blocks missing their title element, or with fewer than two title spans,
/// are skipped.
pub fn parse_courses(html: &str, selectors: &PageSelectors) -> Vec<CourseRecord> {
    let document = Html::parse_document(html);
    document
        .select(&selectors.block)
        .filter_map(|block| parse_block(block, selectors))
        .collect()
}

fn parse_block(block: ElementRef<'_>, selectors: &PageSelectors) -> Option<CourseRecord> {
    let Some(title_elem) = block.select(&selectors.title).next() else {
        log::debug("Skipping course block without a title element");
        return None;
    };

    let mut spans = title_elem.select(&selectors.title_span);
    let (Some(code_span), Some(title_span)) = (spans.next(), spans.next()) else {
        log::debug(&format!(
            "Skipping course block with fewer than two title spans: {}",
            element_text(title_elem)
        ));
        return None;
    };

    let raw_code = element_text(code_span);
    let title = element_text(title_span);
    let credits = residual_credits(&element_text(title_elem), &raw_code, &title);

    let description = block
        .select(&selectors.description)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let department = block
        .select(&selectors.label)
        .find(|label| label.text().collect::<String>().contains(&selectors.department_marker))
        .map(trailing_text)
        .unwrap_or_default();

    Some(CourseRecord {
        code: CourseRecord::normalize_code(&raw_code),
        title,
        credits,
        description,
        department,
    })
}

/// Derive the credit text by removing the known fields from the full title text.
///
/// The first occurrence of `code` is removed, then the first occurrence of
/// `title` at or after that point, then every `Credits` word. Each known field
/// is removed at most once, so repeated text elsewhere in the title survives.
fn residual_credits(full: &str, code: &str, title: &str) -> String {
    let mut text = full.to_string();
    let mut from = 0;

    if !code.is_empty() {
        if let Some(pos) = text.find(code) {
            text.replace_range(pos..pos + code.len(), "");
            from = pos;
        }
    }

    if !title.is_empty() {
        if let Some(offset) = text[from..].find(title) {
            let pos = from + offset;
            text.replace_range(pos..pos + title.len(), "");
        }
    }

    normalize_whitespace(&text.replace(CREDITS_WORD, ""))
}

/// Text following a label element within its parent, up to the next `b` or `br`.
fn trailing_text(label: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in label.next_siblings() {
        if let Some(t) = node.value().as_text() {
            text.push_str(t);
            continue;
        }

        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if matches!(element.value().name(), "b" | "br") {
            break;
        }
        text.extend(element.text());
    }

    normalize_whitespace(&text)
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

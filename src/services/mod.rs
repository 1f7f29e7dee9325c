// src/services/mod.rs

//! Service layer for the scraper.
//!
//! This module contains the business logic for:
//! - Department link discovery (`LinkDiscoverer`)
//! - Course extraction (`CourseExtractor`)
//! - Compiled page selectors (`PageSelectors`)

mod courses;
mod links;
mod selectors;

pub use courses::{CourseExtractor, PageCourses, parse_courses};
pub use links::{LinkDiscoverer, department_links};
pub use selectors::PageSelectors;

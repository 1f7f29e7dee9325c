// src/services/selectors.rs

//! Compiled CSS selectors for catalog pages.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::CatalogSelectors;

/// Parsed form of [`CatalogSelectors`], built once per run.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub link: Selector,
    pub block: Selector,
    pub title: Selector,
    pub title_span: Selector,
    pub description: Selector,
    pub label: Selector,
    pub department_marker: String,
}

impl PageSelectors {
    /// Parse every configured selector, failing on the first invalid one.
    pub fn compile(config: &CatalogSelectors) -> Result<Self> {
        Ok(Self {
            link: parse_selector(&config.link_selector)?,
            block: parse_selector(&config.block_selector)?,
            title: parse_selector(&config.title_selector)?,
            title_span: parse_selector(&config.title_span_selector)?,
            description: parse_selector(&config.description_selector)?,
            label: parse_selector(&config.label_selector)?,
            department_marker: config.department_marker.clone(),
        })
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.courseblock").is_ok());
        assert!(parse_selector("p.courseblocktitle span.text").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_default_selectors_compile() {
        let selectors = PageSelectors::compile(&CatalogSelectors::default()).unwrap();
        assert_eq!(selectors.department_marker, "College/Department:");
    }
}

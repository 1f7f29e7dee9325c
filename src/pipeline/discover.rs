// src/pipeline/discover.rs

//! Department discovery on its own, without extraction.

use crate::error::Result;
use crate::models::{Config, DepartmentLink};
use crate::services::{LinkDiscoverer, PageSelectors};
use crate::utils::http::PageSource;
use crate::utils::log;

/// Discover department pages from the catalog index.
pub async fn run_discover(
    config: &Config,
    source: &dyn PageSource,
) -> Result<Vec<DepartmentLink>> {
    let selectors = PageSelectors::compile(&config.selectors)?;
    log::info(&format!(
        "Discovering department pages from {}",
        config.catalog.index_url()
    ));

    let links = LinkDiscoverer::new(source, &config.catalog, &selectors)
        .discover()
        .await;

    log::info(&format!("Found {} department page(s)", links.len()));
    Ok(links)
}

// src/pipeline/scrape.rs

//! Full scrape: discover department pages, extract courses, write the list.

use futures::{StreamExt, stream};

use crate::error::Result;
use crate::models::{Config, CourseRecord, DepartmentLink};
use crate::services::{CourseExtractor, LinkDiscoverer, PageSelectors};
use crate::storage::{CourseStorage, WriteOutcome};
use crate::utils::http::PageSource;
use crate::utils::log;

/// Summary of a scrape run.
#[derive(Debug)]
pub struct RunReport {
    /// Department pages discovered on the index
    pub link_count: usize,
    /// Department pages that could not be retrieved
    pub page_failures: usize,
    /// Every extracted course, in link then document order
    pub courses: Vec<CourseRecord>,
    pub outcome: WriteOutcome,
}

/// Run the scraper: discovery, then extraction, then writing.
///
/// Fetch failures never abort the run; only invalid selectors and write
/// errors are returned.
pub async fn run_scraper(
    config: &Config,
    source: &dyn PageSource,
    storage: &dyn CourseStorage,
) -> Result<RunReport> {
    let selectors = PageSelectors::compile(&config.selectors)?;
    log::banner("Course catalog scraper", &config.catalog.index_url());

    log::stage(1, 3, "Discovering department pages");
    let links = LinkDiscoverer::new(source, &config.catalog, &selectors)
        .discover()
        .await;
    log::info(&format!("Found {} department page(s)", links.len()));

    log::stage(2, 3, "Extracting courses");
    let extractor = CourseExtractor::new(source, &selectors);
    let (courses, page_failures) =
        collect_courses(&extractor, &links, config.http.max_concurrent).await;
    log::info(&format!("Total courses extracted: {}", courses.len()));

    log::stage(3, 3, "Writing course list");
    let outcome = storage.write_courses(&courses).await?;
    match &outcome {
        WriteOutcome::Written { path, .. } => {
            log::success(&format!("Course list saved to {}", path.display()));
        }
        WriteOutcome::Skipped => log::warn("No course data extracted."),
    }

    log::tally(&[
        ("department pages", links.len()),
        ("failed pages", page_failures),
        ("courses", courses.len()),
    ]);

    Ok(RunReport {
        link_count: links.len(),
        page_failures,
        courses,
        outcome,
    })
}

/// Extract every link's courses into one ordered list.
///
/// Up to `concurrency` pages are in flight; results are merged in link order
/// regardless of completion order.
async fn collect_courses(
    extractor: &CourseExtractor<'_>,
    links: &[DepartmentLink],
    concurrency: usize,
) -> (Vec<CourseRecord>, usize) {
    let total = links.len();
    let mut pages = stream::iter(links.iter().enumerate())
        .map(|(i, link)| async move {
            log::info(&format!("Scraping [{}/{}] {}", i + 1, total, link));
            extractor.extract(link).await
        })
        .buffered(concurrency.max(1));

    let mut courses = Vec::new();
    let mut failures = 0;
    while let Some(page) = pages.next().await {
        if page.failed {
            failures += 1;
        }
        courses.extend(page.courses);
    }

    (courses, failures)
}

// src/services/links.rs

//! Department link discovery.
//!
//! Reads the catalog index page and keeps the anchors that point at
//! department listing pages.

use scraper::Html;

use crate::error::Result;
use crate::models::{CatalogConfig, DepartmentLink};
use crate::services::PageSelectors;
use crate::utils::http::PageSource;
use crate::utils::log;
use crate::utils::url::{join_origin, same_site_path};

/// Service for discovering department listing pages.
pub struct LinkDiscoverer<'a> {
    source: &'a dyn PageSource,
    catalog: &'a CatalogConfig,
    selectors: &'a PageSelectors,
}

impl<'a> LinkDiscoverer<'a> {
    /// Create a new link discoverer.
    pub fn new(
        source: &'a dyn PageSource,
        catalog: &'a CatalogConfig,
        selectors: &'a PageSelectors,
    ) -> Self {
        Self {
            source,
            catalog,
            selectors,
        }
    }

    /// Fetch the index page and return its department links.
    ///
    /// A failed retrieval is reported and yields no links.
    pub async fn discover(&self) -> Vec<DepartmentLink> {
        match self.try_discover().await {
            Ok(links) => links,
            Err(e) => {
                log::error(&format!("Failed to retrieve catalog index: {e}"));
                Vec::new()
            }
        }
    }

    /// Fetch the index page, propagating retrieval errors.
    pub async fn try_discover(&self) -> Result<Vec<DepartmentLink>> {
        let page = self.source.fetch(&self.catalog.index_url()).await?;
        let document = Html::parse_document(&page.body);
        Ok(department_links(&document, self.selectors, self.catalog).collect())
    }
}

/// Lazily yield the department links of a parsed index page, in document order.
///
/// An href qualifies when it is root-relative, or an absolute URL on the
/// catalog host, and its path begins with the configured prefix. Each is
/// rebuilt as origin plus path. Repeated links are kept.
pub fn department_links<'d>(
    document: &'d Html,
    selectors: &'d PageSelectors,
    catalog: &'d CatalogConfig,
) -> impl Iterator<Item = DepartmentLink> + 'd {
    document
        .select(&selectors.link)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(move |href| same_site_path(href, &catalog.origin))
        .filter(move |path| path.starts_with(&catalog.link_prefix))
        .map(move |path| DepartmentLink::new(join_origin(&catalog.origin, &path)))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;
    use crate::models::CatalogSelectors;
    use crate::utils::http::FetchedPage;

    const INDEX: &str = r##"
        <html><body>
          <a href="/coursedescriptions/quarter/undergrad/cs/">Computer Science (CS)</a>
          <a href="/coursedescriptions/quarter/grad/cs/">Computer Science (Graduate)</a>
          <a href="/coursedescriptions/quarter/undergrad/math/">Mathematics (MATH)</a>
          <a href="https://www.drexel.edu/">Drexel Home</a>
          <a href="#content">Skip to content</a>
          <a>No href</a>
          <a href="/coursedescriptions/quarter/undergrad/cs/">Computer Science again</a>
        </body></html>
    "##;

    fn selectors() -> PageSelectors {
        PageSelectors::compile(&CatalogSelectors::default()).unwrap()
    }

    struct StaticIndex(std::result::Result<&'static str, u16>);

    #[async_trait]
    impl PageSource for StaticIndex {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            match self.0 {
                Ok(body) => Ok(FetchedPage {
                    url: url.to_string(),
                    body: body.to_string(),
                }),
                Err(status) => Err(AppError::status(url, status)),
            }
        }
    }

    #[test]
    fn keeps_only_qualifying_anchors_in_order() {
        let document = Html::parse_document(INDEX);
        let selectors = selectors();
        let catalog = CatalogConfig::default();

        let links: Vec<_> = department_links(&document, &selectors, &catalog).collect();

        assert_eq!(
            links,
            vec![
                DepartmentLink::new(
                    "https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/cs/"
                ),
                DepartmentLink::new(
                    "https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/math/"
                ),
                DepartmentLink::new(
                    "https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/cs/"
                ),
            ]
        );
    }

    /// Refuses every connection, as a closed port would.
    struct Unreachable;

    #[async_trait]
    impl PageSource for Unreachable {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            Err(std::io::Error::from(std::io::ErrorKind::ConnectionRefused).into())
        }
    }

    #[test]
    fn accepts_root_relative_and_same_host_absolute_hrefs() {
        let document = Html::parse_document(
            r#"<html><body>
              <a href="/coursedescriptions/quarter/undergrad/cs/">CS</a>
              <a href="https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/math/">MATH</a>
              <a href="https://catalog.drexel.edu/coursedescriptions/quarter/grad/math/">MATH (Graduate)</a>
              <a href="https://mirror.example.org/coursedescriptions/quarter/undergrad/phys/">PHYS</a>
            </body></html>"#,
        );
        let selectors = selectors();
        let catalog = CatalogConfig::default();

        let links: Vec<_> = department_links(&document, &selectors, &catalog)
            .map(|l| l.as_str().to_string())
            .collect();

        assert_eq!(
            links,
            [
                "https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/cs/",
                "https://catalog.drexel.edu/coursedescriptions/quarter/undergrad/math/",
            ]
        );
    }

    #[test]
    fn counts_n_qualifying_among_m_others() {
        let qualifying = 7;
        let other = 5;
        let mut html = String::from("<html><body>");
        for i in 0..qualifying {
            html.push_str(&format!(
                r#"<a href="/coursedescriptions/quarter/undergrad/d{i}/">D{i}</a>"#
            ));
            if i < other {
                html.push_str(&format!(r#"<a href="/other/{i}/">O{i}</a>"#));
            }
        }
        html.push_str("</body></html>");

        let document = Html::parse_document(&html);
        let selectors = selectors();
        let catalog = CatalogConfig {
            origin: "http://localhost:9000/".to_string(),
            ..CatalogConfig::default()
        };

        let links: Vec<_> = department_links(&document, &selectors, &catalog).collect();
        assert_eq!(links.len(), qualifying);
        assert!(links.iter().all(|l| {
            l.as_str()
                .starts_with("http://localhost:9000/coursedescriptions/quarter/undergrad/")
        }));
    }

    #[test]
    fn empty_index_yields_nothing() {
        let document = Html::parse_document("<html><body><p>Maintenance</p></body></html>");
        let selectors = selectors();
        let catalog = CatalogConfig::default();
        assert_eq!(department_links(&document, &selectors, &catalog).count(), 0);
    }

    #[tokio::test]
    async fn discover_fetches_index_url() {
        let source = StaticIndex(Ok(INDEX));
        let selectors = selectors();
        let catalog = CatalogConfig::default();

        let links = LinkDiscoverer::new(&source, &catalog, &selectors)
            .discover()
            .await;
        assert_eq!(links.len(), 3);
    }

    #[tokio::test]
    async fn discover_degrades_to_empty_on_failed_status() {
        let source = StaticIndex(Err(500));
        let selectors = selectors();
        let catalog = CatalogConfig::default();
        let discoverer = LinkDiscoverer::new(&source, &catalog, &selectors);

        assert!(discoverer.discover().await.is_empty());
        assert!(matches!(
            discoverer.try_discover().await,
            Err(AppError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn discover_degrades_to_empty_on_transport_error() {
        let selectors = selectors();
        let catalog = CatalogConfig::default();
        let discoverer = LinkDiscoverer::new(&Unreachable, &catalog, &selectors);

        assert!(discoverer.discover().await.is_empty());
        assert!(matches!(
            discoverer.try_discover().await,
            Err(AppError::Io(_))
        ));
    }
}

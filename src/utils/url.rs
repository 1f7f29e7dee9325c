// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

/// Join a site origin and a root-relative path.
///
/// # Examples
/// ```
/// use catalog_scraper::utils::url::join_origin;
///
/// assert_eq!(
///     join_origin("https://example.com/", "/courses/cs/"),
///     "https://example.com/courses/cs/"
/// );
/// ```
pub fn join_origin(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

/// Path of `href` on the site at `origin`.
///
/// Root-relative hrefs are returned as written. Absolute URLs yield their
/// path only when their host is the origin's host. Fragments, relative
/// paths and other schemes yield `None`.
pub fn same_site_path(href: &str, origin: &str) -> Option<String> {
    if href.starts_with('/') && !href.starts_with("//") {
        return Some(href.to_string());
    }

    let url = Url::parse(href).ok()?;
    let site = Url::parse(origin).ok()?;
    let host = url.host_str()?;
    (site.host_str() == Some(host)).then(|| url.path().to_string())
}

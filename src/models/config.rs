// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::CatalogSelectors;
use crate::services::PageSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Catalog location and link filtering
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page structure selectors
    #[serde(default)]
    pub selectors: CatalogSelectors,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Console logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }

        let origin = url::Url::parse(&self.catalog.origin)?;
        if !matches!(origin.scheme(), "http" | "https") || origin.host_str().is_none() {
            return Err(AppError::validation(format!(
                "catalog.origin must be an absolute http(s) URL, got '{}'",
                self.catalog.origin
            )));
        }
        if !self.catalog.index_path.starts_with('/') {
            return Err(AppError::validation(
                "catalog.index_path must start with '/'",
            ));
        }
        if !self.catalog.link_prefix.starts_with('/') {
            return Err(AppError::validation(
                "catalog.link_prefix must start with '/'",
            ));
        }
        if self.selectors.department_marker.trim().is_empty() {
            return Err(AppError::validation(
                "selectors.department_marker is empty",
            ));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }

        PageSelectors::compile(&self.selectors)?;
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Department pages fetched at once.
    ///
    /// Opt-in extension: the default of 1 keeps the scrape strictly
    /// sequential. Larger values still write courses in link order.
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Catalog location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Scheme and host of the catalog site, without a trailing path
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Path of the catalog index page
    #[serde(default = "defaults::catalog_path")]
    pub index_path: String,

    /// Href prefix identifying department listing pages
    #[serde(default = "defaults::catalog_path")]
    pub link_prefix: String,
}

impl CatalogConfig {
    /// Absolute URL of the catalog index page.
    pub fn index_url(&self) -> String {
        crate::utils::url::join_origin(&self.origin, &self.index_path)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            origin: defaults::origin(),
            index_path: defaults::catalog_path(),
            link_prefix: defaults::catalog_path(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV course list
    #[serde(default = "defaults::output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

/// Console logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum console level: debug, info, warn or error
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; catalog-scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        1
    }

    // Catalog defaults
    pub fn origin() -> String {
        "https://catalog.drexel.edu".into()
    }
    pub fn catalog_path() -> String {
        "/coursedescriptions/quarter/undergrad/".into()
    }

    // Output defaults
    pub fn output_path() -> String {
        "drexel_courses.csv".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

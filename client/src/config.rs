//! API base-URL configuration shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host injects one `ApiConfig` into the Leptos context while rendering and
//! writes the same base URL into a `<meta name="rms-api-base">` tag. After
//! hydration the browser reads that tag back, so both sides build identical
//! endpoint URLs from a single value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// `name` attribute of the `<meta>` tag carrying the base URL to the browser.
pub const API_BASE_META_NAME: &str = "rms-api-base";

/// Location of the RMS REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped; a blank
    /// value falls back to [`DEFAULT_API_BASE`].
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base: DEFAULT_API_BASE.to_owned() };
        }
        Self { base: trimmed.to_owned() }
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Projects collection endpoint (`GET` list, `POST` create).
    pub fn projects_url(&self) -> String {
        format!("{}/projects/", self.base)
    }

    /// Ratings collection endpoint (`GET` list, `POST` create).
    pub fn ratings_url(&self) -> String {
        format!("{}/ratings", self.base)
    }

    /// Read the base URL the host rendered into the page head.
    ///
    /// Falls back to the default when the tag is missing.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .map(Self::new)
            .unwrap_or_default()
    }
}

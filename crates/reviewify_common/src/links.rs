//! Link formatting for entity representations.
//!
//! Every outward-facing entity carries a canonical `self` URL, and review
//! representations point at their owning business. All of those URLs are
//! derived here, from the configured base URL, so handlers never do string
//! surgery on request paths.

use reviewify_config::ServerConfig;

/// Builds canonical URLs for entities from a fixed base.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_server_config(server: &ServerConfig) -> Self {
        Self::new(server.public_base_url())
    }

    /// Canonical URL for a single business.
    pub fn business(&self, id: i64) -> String {
        format!("{}/businesses/{}", self.base, id)
    }

    /// Canonical URL for a single review.
    pub fn review(&self, id: i64) -> String {
        format!("{}/reviews/{}", self.base, id)
    }

    /// URL for a page of the business listing.
    pub fn businesses_page(&self, offset: i64, limit: i64) -> String {
        format!("{}/businesses?offset={}&limit={}", self.base, offset, limit)
    }
}

//! Catalog source trait for fetching the version manifest from a remote host

use tracing::{info, warn};

use crate::catalog::error::FetchError;

/// Trait for fetching the full catalog document from a remote source
///
/// A single blocking attempt; callers decide what to do with the bytes.
/// No retry or backoff is performed here.
pub trait CatalogSource {
    /// Fetches the complete catalog body.
    fn fetch_catalog(&self) -> Result<Vec<u8>, FetchError>;
}

/// Catalog source backed by a blocking HTTP client
pub struct HttpCatalogSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("mcdate")
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_catalog(&self) -> Result<Vec<u8>, FetchError> {
        info!("Fetching version manifest from {}", self.url);

        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Manifest host returned status {}: {}", status, self.url);
        }

        let body = response.error_for_status()?.bytes()?;
        Ok(body.to_vec())
    }
}

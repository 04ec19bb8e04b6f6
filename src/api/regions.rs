//! Region metadata client.
//!
//! `GET {base_url}/regions/metadata` with a JSON content type. A successful
//! response is kept for the lifetime of the client since region data
//! rarely changes; failures are never cached.

use std::sync::{Arc, Mutex};

use crate::error::{LoadError, LoadResult};
use crate::models::RegionMetadataResponse;
use crate::traits::{Headers, HttpClient};

/// Path appended to the configured base URL.
pub const METADATA_PATH: &str = "/regions/metadata";

/// Fetches region metadata through an injected [`HttpClient`].
pub struct RegionApi<C: HttpClient> {
    client: C,
    base_url: String,
    cached: Mutex<Option<Arc<RegionMetadataResponse>>>,
}

impl<C: HttpClient> RegionApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            cached: Mutex::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn metadata_url(&self) -> String {
        format!("{}{}", self.base_url, METADATA_PATH)
    }

    /// Fetch the region list, serving the cached copy when one exists.
    pub async fn fetch_region_metadata(&self) -> LoadResult<Arc<RegionMetadataResponse>> {
        if let Some(cached) = self.cached_response() {
            tracing::debug!("Serving region metadata from cache");
            return Ok(cached);
        }

        let url = self.metadata_url();
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let result = self.request(&url, &headers).await;
        match &result {
            Ok(data) => {
                tracing::info!(count = data.regions.len(), "Loaded region metadata");
                if let Ok(mut cached) = self.cached.lock() {
                    *cached = Some(Arc::clone(data));
                }
            }
            Err(err) => tracing::error!(url = %url, "Region metadata fetch failed: {}", err),
        }
        result
    }

    /// Drop the cached response so the next fetch goes to the network.
    pub fn invalidate(&self) {
        if let Ok(mut cached) = self.cached.lock() {
            *cached = None;
        }
    }

    fn cached_response(&self) -> Option<Arc<RegionMetadataResponse>> {
        self.cached.lock().ok().and_then(|cached| cached.clone())
    }

    async fn request(&self, url: &str, headers: &Headers) -> LoadResult<Arc<RegionMetadataResponse>> {
        let response = self.client.get(url, headers).await?;

        if !response.is_success() {
            return Err(LoadError::Status {
                status: response.status,
                reason: response.reason.clone(),
            });
        }

        let data: RegionMetadataResponse = response.json()?;
        Ok(Arc::new(data))
    }
}

//! Metadata loader: fetches the region list once per mount.
//!
//! The fetch runs in a spawned task and reports back over the app channel
//! with the mount generation it was started for. A reload bumps the
//! generation and aborts the running task, so a late completion from an
//! earlier mount is dropped instead of overwriting newer state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::api::RegionApi;
use crate::error::LoadResult;
use crate::models::Region;
use crate::store::RegionStore;
use crate::traits::HttpClient;

/// Region API shared between the UI task and loader tasks.
pub type SharedRegionApi = Arc<RegionApi<Arc<dyn HttpClient>>>;

pub struct MetadataLoader {
    api: SharedRegionApi,
    generation: u64,
    started: bool,
    task: Option<JoinHandle<()>>,
}

impl MetadataLoader {
    pub fn new(api: SharedRegionApi) -> Self {
        Self {
            api,
            generation: 0,
            started: false,
            task: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Begin the load for the current mount. Returns false if this mount
    /// already started one. Must be called from within a tokio runtime.
    pub fn start(&mut self, store: &mut RegionStore, tx: &mpsc::UnboundedSender<AppMessage>) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        store.set_is_loading(true);
        store.set_error(None);

        let api = Arc::clone(&self.api);
        let tx = tx.clone();
        let generation = self.generation;
        tracing::debug!(generation, url = %api.metadata_url(), "Starting region metadata load");

        self.task = Some(tokio::spawn(async move {
            let result = api
                .fetch_region_metadata()
                .await
                .map(|response| response.regions.clone());
            if tx.send(AppMessage::RegionsLoaded { generation, result }).is_err() {
                tracing::debug!(generation, "App gone before region metadata arrived");
            }
        }));
        true
    }

    /// Apply a finished load to the store. Completions from an earlier
    /// mount are ignored and return false.
    pub fn complete(
        &mut self,
        store: &mut RegionStore,
        generation: u64,
        result: LoadResult<Vec<Region>>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "Ignoring region metadata from a previous mount"
            );
            return false;
        }
        self.task = None;

        match result {
            Ok(regions) => store.set_regions(regions),
            Err(err) => {
                tracing::warn!("Region metadata load failed: {}", err);
                store.set_error(Some(err.user_message()));
            }
        }
        store.set_is_loading(false);
        true
    }

    /// Tear down the current mount: abort any in-flight fetch, drop the
    /// cached response and allow the next mount to load again.
    pub fn remount(&mut self) {
        self.abort();
        self.generation += 1;
        self.started = false;
        self.api.invalidate();
    }

    pub fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for MetadataLoader {
    fn drop(&mut self) {
        self.abort();
    }
}

impl std::fmt::Debug for MetadataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataLoader")
            .field("base_url", &self.api.base_url())
            .field("generation", &self.generation)
            .field("started", &self.started)
            .field("in_flight", &self.is_in_flight())
            .finish()
    }
}

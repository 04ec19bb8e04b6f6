//! Application state for the region selector.
//!
//! [`App`] owns the selection store and the three views bound to it. One
//! mount is one lifetime of the store: [`App::mount`] attaches the views and
//! starts the metadata load, [`App::reload`] tears everything down and
//! mounts again.

mod handlers;
mod loader;
mod messages;

pub use loader::{MetadataLoader, SharedRegionApi};
pub use messages::AppMessage;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::map::MapView;
use crate::store::RegionStore;
use crate::ui::info_card::InfoCardView;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::quick_select::QuickSelectGrid;
use crate::ui::status::next_spinner_frame;
use crate::ui::viewport::Viewport;

pub struct App {
    pub store: RegionStore,
    pub map: MapView,
    pub quick_select: QuickSelectGrid,
    pub info_card: InfoCardView,
    /// Clickable buttons registered during the last render
    pub hit_registry: HitAreaRegistry,
    pub viewport: Viewport,
    /// Canvas area of the map from the last render; `None` while the map
    /// panel shows the loading or error state.
    pub map_area: Option<Rect>,
    pub loader: MetadataLoader,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(api: SharedRegionApi, viewport: Viewport) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            store: RegionStore::new(),
            map: MapView::new(),
            quick_select: QuickSelectGrid::new(),
            info_card: InfoCardView::new(),
            hit_registry: HitAreaRegistry::new(),
            viewport,
            map_area: None,
            loader: MetadataLoader::new(api),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            spinner_frame: 0,
        }
    }

    /// Attach the views to the store and start loading regions.
    pub fn mount(&mut self) {
        self.map.attach(&mut self.store);
        self.quick_select.attach(&mut self.store);
        self.info_card.attach(&mut self.store);
        self.loader.start(&mut self.store, &self.message_tx);
        self.mark_dirty();
    }

    /// Detach the views and abort any in-flight load.
    pub fn unmount(&mut self) {
        self.map.detach(&mut self.store);
        self.quick_select.detach(&mut self.store);
        self.info_card.detach(&mut self.store);
        self.loader.remount();
        self.map_area = None;
    }

    /// Full reload: a fresh store, a fresh load.
    pub fn reload(&mut self) {
        tracing::info!("Reloading region selector");
        self.unmount();
        self.store = RegionStore::new();
        self.mount();
    }

    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RegionsLoaded { generation, result } => {
                if self.loader.complete(&mut self.store, generation, result) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Bring every view up to date with the store.
    pub fn sync_views(&mut self) {
        let state = self.store.state();
        self.map.sync(state);
        self.quick_select.sync(state);
        self.info_card.sync(state);
    }

    /// Select the region with `region_id`, or clear it if already selected.
    pub fn toggle_region(&mut self, region_id: &str) -> bool {
        let Some(region) = self.store.state().region_by_id(region_id).cloned() else {
            tracing::debug!(region = region_id, "Toggle for unknown region ignored");
            return false;
        };
        self.store.toggle_selection(&region);
        self.mark_dirty();
        true
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_desktop() {
            self.map.clear_pointer(&mut self.store);
        }
        self.mark_dirty();
    }

    /// Animation tick; only the loading spinner moves.
    pub fn tick(&mut self) {
        if self.store.state().is_loading {
            self.spinner_frame = next_spinner_frame(self.spinner_frame);
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

//! Selection store shared by the map, the quick-select grid and the info card.
//!
//! The store is an explicitly constructed value owned by the app and passed
//! by reference into each view. Setters replace one field wholesale and then
//! synchronously notify the subscribers that registered for that field.
//! There is a single writer (the UI task) so no locking is involved.
//!
//! ```ignore
//! let mut store = RegionStore::new();
//! let dirty = DirtyFlag::new();
//! let flag = dirty.clone();
//! store.subscribe(FieldSet::SELECTED, move |_| flag.mark());
//! store.toggle_selection(&region);
//! assert!(dirty.take());
//! ```

mod state;
mod subscription;

pub use state::{DisplayMode, SelectionState};
pub use subscription::{DirtyFlag, FieldSet, SubscriptionId};

use crate::models::Region;
use subscription::Subscriber;

/// Observable container for [`SelectionState`].
#[derive(Default)]
pub struct RegionStore {
    state: SelectionState,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Register `callback` for changes to any field in `fields`.
    ///
    /// The callback receives the state after the write. A single setter
    /// invokes a given subscriber at most once.
    pub fn subscribe<F>(&mut self, fields: FieldSet, callback: F) -> SubscriptionId
    where
        F: FnMut(&SelectionState) + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push(Subscriber {
            id,
            fields,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() < before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn set_regions(&mut self, regions: Vec<Region>) {
        let changed = self.state.regions != regions;
        self.state.regions = regions;
        if changed {
            self.notify(FieldSet::REGIONS);
        }
    }

    pub fn set_selected_region(&mut self, region: Option<Region>) {
        let changed = self.state.selected_region != region;
        self.state.selected_region = region;
        if changed {
            self.notify(FieldSet::SELECTED);
        }
    }

    pub fn set_hovered_region(&mut self, region: Option<Region>) {
        let changed = self.state.hovered_region != region;
        self.state.hovered_region = region;
        if changed {
            self.notify(FieldSet::HOVERED);
        }
    }

    pub fn set_is_loading(&mut self, is_loading: bool) {
        let changed = self.state.is_loading != is_loading;
        self.state.is_loading = is_loading;
        if changed {
            self.notify(FieldSet::LOADING);
        }
    }

    pub fn set_error(&mut self, error: Option<String>) {
        let changed = self.state.error != error;
        self.state.error = error;
        if changed {
            self.notify(FieldSet::ERROR);
        }
    }

    /// Clear selection, hover and error in one step.
    pub fn reset_selection(&mut self) {
        let mut changed = FieldSet::empty();
        if self.state.selected_region.take().is_some() {
            changed = changed | FieldSet::SELECTED;
        }
        if self.state.hovered_region.take().is_some() {
            changed = changed | FieldSet::HOVERED;
        }
        if self.state.error.take().is_some() {
            changed = changed | FieldSet::ERROR;
        }
        if !changed.is_empty() {
            self.notify(changed);
        }
    }

    /// Select `region`, or clear the selection if it is already selected.
    ///
    /// Both the map and the quick-select grid go through here.
    pub fn toggle_selection(&mut self, region: &Region) {
        let already_selected = self
            .state
            .selected_region
            .as_ref()
            .is_some_and(|selected| selected.same_as(region));

        if already_selected {
            tracing::debug!(region = %region.id, "Selection cleared");
            self.set_selected_region(None);
        } else {
            tracing::debug!(region = %region.id, "Region selected");
            self.set_selected_region(Some(region.clone()));
        }
    }

    fn notify(&mut self, changed: FieldSet) {
        let state = &self.state;
        for subscriber in self.subscribers.iter_mut() {
            if subscriber.fields.intersects(changed) {
                (subscriber.callback)(state);
            }
        }
    }
}

/// A view's subscription to the store: which fields it reads and a flag
/// that is raised whenever one of them changes.
#[derive(Debug)]
pub struct ViewSubscription {
    fields: FieldSet,
    dirty: DirtyFlag,
    id: Option<SubscriptionId>,
}

impl ViewSubscription {
    /// Starts dirty so the view renders once after attaching.
    pub fn new(fields: FieldSet) -> Self {
        Self {
            fields,
            dirty: DirtyFlag::dirty(),
            id: None,
        }
    }

    pub fn attach(&mut self, store: &mut RegionStore) {
        if self.id.is_some() {
            return;
        }
        let flag = self.dirty.clone();
        self.id = Some(store.subscribe(self.fields, move |_| flag.mark()));
        self.dirty.mark();
    }

    pub fn detach(&mut self, store: &mut RegionStore) {
        if let Some(id) = self.id.take() {
            store.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Consume the dirty flag.
    pub fn take(&self) -> bool {
        self.dirty.take()
    }
}

impl std::fmt::Debug for RegionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

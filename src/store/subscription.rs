use bitflags::bitflags;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::SelectionState;

bitflags! {
    /// Set of [`SelectionState`] fields a subscriber is interested in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldSet: u8 {
        const REGIONS = 1;
        const SELECTED = 1 << 1;
        const HOVERED = 1 << 2;
        const LOADING = 1 << 3;
        const ERROR = 1 << 4;
    }
}

/// Handle returned by [`super::RegionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

pub(super) struct Subscriber {
    pub(super) id: SubscriptionId,
    pub(super) fields: FieldSet,
    pub(super) callback: Box<dyn FnMut(&SelectionState) + Send>,
}

/// Shared "needs re-render" flag, set from a store subscription and
/// consumed by the view before drawing.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Arc<AtomicBool>);

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag that starts dirty, so the first frame renders.
    pub fn dirty() -> Self {
        let flag = Self::new();
        flag.mark();
        flag
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_dirty(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Return the flag and clear it.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

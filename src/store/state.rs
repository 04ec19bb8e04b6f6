use crate::models::Region;

/// What the map panel should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Error,
    Ready,
}

/// The fields of the selection store.
///
/// Loading, error and populated regions are independent fields; the
/// display mode is derived from them at read time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub regions: Vec<Region>,
    pub selected_region: Option<Region>,
    /// Desktop pointer only; independent of selection.
    pub hovered_region: Option<Region>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_region.as_ref().map(|r| r.id.as_str())
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_region.as_ref().map(|r| r.id.as_str())
    }

    pub fn is_selected(&self, region: &Region) -> bool {
        self.selected_id() == Some(region.id.as_str())
    }

    /// Some region is selected and it is not `region`.
    pub fn is_dimmed(&self, region: &Region) -> bool {
        matches!(self.selected_id(), Some(id) if id != region.id)
    }

    pub fn region_by_id(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Tier-1 active regions in original order.
    pub fn quick_select_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.is_quick_selectable())
    }

    /// Loading wins over error, error wins over content.
    pub fn display_mode(&self) -> DisplayMode {
        if self.is_loading {
            DisplayMode::Loading
        } else if self.error.is_some() {
            DisplayMode::Error
        } else {
            DisplayMode::Ready
        }
    }
}

//! Hit area system for mouse interactions outside the map canvas.
//!
//! Components register clickable rectangles while rendering; the event loop
//! queries the registry on mouse events. The map canvas does its own
//! shape-level hit testing and is not registered here.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Toggle selection of the region with this id (quick-select button)
    ToggleRegion(String),
    /// Reload the selector after a failed load
    Retry,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
///
/// Areas are cleared at the start of every render, but the last pointer
/// position survives so hover styling stays on while the pointer rests.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas; later registrations are on top.
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all areas. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.topmost(x, y).map(|area| area.action.clone())
    }

    /// Record the pointer position. Returns true if the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered().map(|area| area.action.clone());
        self.pointer = Some((x, y));
        let after = self.hovered().map(|area| area.action.clone());
        before != after
    }

    /// Hover style for `rect` if the pointer is over an area with that rect.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        self.hovered()
            .filter(|area| area.rect == rect)
            .and_then(|area| area.hover_style)
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        let (x, y) = self.pointer?;
        self.topmost(x, y)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    fn topmost(&self, x: u16, y: u16) -> Option<&HitArea> {
        self.areas.iter().rev().find(|area| area.contains(x, y))
    }
}

//! Map view: projects the selection store onto a [`MapScene`].
//!
//! Every render pass clears the scene and redraws all regions. Pointer
//! handlers write to the store first and then restyle the affected shape
//! directly, so the scene is correct even before the next pass runs.

use std::collections::HashMap;

use super::geometry::{Outline, Point};
use super::path::parse_path;
use super::scene::{
    LabelKind, LabelNode, MapScene, ShapeNode, ShapeStyle, DIMMED_OPACITY,
    STROKE_WEIGHT_SELECTED,
};
use super::PointerOutcome;
use crate::models::Region;
use crate::store::{FieldSet, RegionStore, SelectionState, ViewSubscription};
use crate::ui::theme::{COLOR_ACCENT, MAP_HOVER_FILL};
use crate::ui::viewport::Viewport;

/// Vertical offset of the emoji label above the anchor.
pub const EMOJI_OFFSET_Y: f64 = -10.0;
/// Vertical offset of the name label below the anchor.
pub const NAME_OFFSET_Y: f64 = 20.0;

/// Store fields that trigger a redraw.
pub const MAP_FIELDS: FieldSet = FieldSet::REGIONS
    .union(FieldSet::SELECTED)
    .union(FieldSet::HOVERED);

/// Style of `region` for the current state.
///
/// Base style, then dimming, then hover, then the selection override,
/// which always wins.
pub fn style_for(state: &SelectionState, region: &Region) -> ShapeStyle {
    let mut style = ShapeStyle::default();
    if state.is_dimmed(region) {
        style.opacity = DIMMED_OPACITY;
    }
    if state.hovered_id() == Some(region.id.as_str()) {
        style.fill = MAP_HOVER_FILL;
        style.opacity = 1.0;
    }
    if state.is_selected(region) {
        style.fill = COLOR_ACCENT;
        style.opacity = 1.0;
        style.stroke_weight = STROKE_WEIGHT_SELECTED;
    }
    style
}

#[derive(Debug)]
pub struct MapView {
    scene: MapScene,
    subscription: ViewSubscription,
    /// Region id the pointer is currently over (desktop only).
    pointer_over: Option<String>,
    /// Parsed outlines keyed by region id, valid for one region list.
    outlines: HashMap<String, (String, Option<Outline>)>,
    redraw_count: u64,
}

impl MapView {
    pub fn new() -> Self {
        Self {
            scene: MapScene::new(),
            subscription: ViewSubscription::new(MAP_FIELDS),
            pointer_over: None,
            outlines: HashMap::new(),
            redraw_count: 0,
        }
    }

    /// Subscribe to the store fields the map reads.
    pub fn attach(&mut self, store: &mut RegionStore) {
        self.subscription.attach(store);
    }

    pub fn detach(&mut self, store: &mut RegionStore) {
        self.subscription.detach(store);
        self.pointer_over = None;
    }

    pub fn scene(&self) -> &MapScene {
        &self.scene
    }

    /// Number of full render passes so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Run a render pass if a relevant store field changed since the last one.
    pub fn sync(&mut self, state: &SelectionState) -> bool {
        if self.subscription.take() {
            self.redraw(state);
            true
        } else {
            false
        }
    }

    /// Clear the scene and draw every region again.
    pub fn redraw(&mut self, state: &SelectionState) {
        self.scene.clear();
        self.redraw_count += 1;

        for region in &state.regions {
            let outline = self.outline_for(region);
            self.scene.push_shape(ShapeNode {
                region_id: region.id.clone(),
                outline,
                style: style_for(state, region),
            });

            let anchor = region.map_position;
            self.scene.push_label(LabelNode {
                region_id: region.id.clone(),
                kind: LabelKind::Emoji,
                text: region.emoji.clone(),
                position: Point::from((anchor.x, anchor.y + EMOJI_OFFSET_Y)),
            });
            self.scene.push_label(LabelNode {
                region_id: region.id.clone(),
                kind: LabelKind::Name,
                text: region.display_name.clone(),
                position: Point::from((anchor.x, anchor.y + NAME_OFFSET_Y)),
            });
        }

        // Drop cached outlines of regions that are gone.
        self.outlines
            .retain(|id, _| state.regions.iter().any(|r| &r.id == id));
    }

    fn outline_for(&mut self, region: &Region) -> Option<Outline> {
        if let Some((path, outline)) = self.outlines.get(&region.id) {
            if path == &region.svg_path {
                return outline.clone();
            }
        }
        let outline = match parse_path(&region.svg_path) {
            Ok(rings) => Some(Outline::new(rings)),
            Err(err) => {
                tracing::warn!(region = %region.id, "Unable to draw region outline: {}", err);
                None
            }
        };
        self.outlines
            .insert(region.id.clone(), (region.svg_path.clone(), outline.clone()));
        outline
    }

    /// Pointer moved to `point` (view-box space), or left the map when `None`.
    ///
    /// Emits leave/enter for the shapes involved. Does nothing below the
    /// desktop width. Returns true if hover changed.
    pub fn pointer_moved(
        &mut self,
        store: &mut RegionStore,
        point: Option<Point>,
        viewport: &Viewport,
    ) -> bool {
        if !viewport.is_desktop() {
            return false;
        }

        let target = point
            .and_then(|p| self.scene.hit_test(p))
            .map(|shape| shape.region_id.clone());
        if target == self.pointer_over {
            return false;
        }

        if let Some(previous) = self.pointer_over.take() {
            self.pointer_leave(store, &previous);
        }
        if let Some(next) = target {
            self.pointer_enter(store, &next);
        }
        true
    }

    /// Hover is switched off (viewport became narrow): leave whatever
    /// shape the pointer was over.
    pub fn clear_pointer(&mut self, store: &mut RegionStore) {
        if let Some(previous) = self.pointer_over.take() {
            self.pointer_leave(store, &previous);
        }
    }

    fn pointer_enter(&mut self, store: &mut RegionStore, region_id: &str) {
        let Some(region) = store.state().region_by_id(region_id).cloned() else {
            return;
        };
        store.set_hovered_region(Some(region.clone()));
        self.pointer_over = Some(region.id.clone());
        self.restyle(store.state(), &region);
    }

    fn pointer_leave(&mut self, store: &mut RegionStore, region_id: &str) {
        store.set_hovered_region(None);
        if let Some(region) = store.state().region_by_id(region_id).cloned() {
            self.restyle(store.state(), &region);
        }
    }

    fn restyle(&mut self, state: &SelectionState, region: &Region) {
        if let Some(shape) = self.scene.shape_mut(&region.id) {
            shape.style = style_for(state, region);
        }
    }

    /// Click at `point` (view-box space). A click on a shape is consumed
    /// and toggles that region's selection; anything else is ignored and
    /// may be handled further up.
    pub fn click(&mut self, store: &mut RegionStore, point: Point) -> PointerOutcome {
        let Some(region_id) = self.scene.hit_test(point).map(|s| s.region_id.clone()) else {
            return PointerOutcome::Ignored;
        };
        let Some(region) = store.state().region_by_id(&region_id).cloned() else {
            return PointerOutcome::Ignored;
        };
        store.toggle_selection(&region);
        PointerOutcome::Consumed
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

//! Retained scene graph drawn by the map canvas.
//!
//! The map view rebuilds this from scratch on every render pass and then
//! mutates individual shape styles from pointer handlers, the same way a
//! DOM-backed map mutates its path elements.

use ratatui::style::Color;

use super::geometry::{Outline, Point};
use crate::ui::theme::{MAP_FILL, MAP_STROKE};

/// Default outline weight.
pub const STROKE_WEIGHT_DEFAULT: u8 = 2;
/// Outline weight of the selected region.
pub const STROKE_WEIGHT_SELECTED: u8 = 3;
/// Opacity of regions that are not the current selection.
pub const DIMMED_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: u8,
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: MAP_FILL,
            stroke: MAP_STROKE,
            stroke_weight: STROKE_WEIGHT_DEFAULT,
            opacity: 1.0,
        }
    }
}

/// One region's drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub region_id: String,
    /// `None` when the region's path could not be parsed; such a region
    /// still gets labels but cannot be hit.
    pub outline: Option<Outline>,
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Emoji,
    Name,
}

/// Text drawn on the map. Labels never take part in hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub region_id: String,
    pub kind: LabelKind,
    pub text: String,
    /// Center of the label in view-box space
    pub position: Point,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapScene {
    shapes: Vec<ShapeNode>,
    labels: Vec<LabelNode>,
}

impl MapScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.labels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.labels.is_empty()
    }

    pub fn push_shape(&mut self, shape: ShapeNode) {
        self.shapes.push(shape);
    }

    pub fn push_label(&mut self, label: LabelNode) {
        self.labels.push(label);
    }

    pub fn shapes(&self) -> &[ShapeNode] {
        &self.shapes
    }

    pub fn labels(&self) -> &[LabelNode] {
        &self.labels
    }

    pub fn shape(&self, region_id: &str) -> Option<&ShapeNode> {
        self.shapes.iter().find(|s| s.region_id == region_id)
    }

    pub fn shape_mut(&mut self, region_id: &str) -> Option<&mut ShapeNode> {
        self.shapes.iter_mut().find(|s| s.region_id == region_id)
    }

    /// Topmost shape containing `point`. Later shapes are drawn on top.
    pub fn hit_test(&self, point: Point) -> Option<&ShapeNode> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.outline.as_ref().is_some_and(|o| o.contains(point)))
    }
}

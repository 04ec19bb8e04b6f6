//! Region outlines in view-box space, backed by `geo` shapes.

use geo::{Area, BoundingRect, Coord, Intersects, MultiPolygon, Rect};

/// Width of the map view box.
pub const VIEW_BOX_WIDTH: f64 = 800.0;
/// Height of the map view box.
pub const VIEW_BOX_HEIGHT: f64 = 600.0;

/// A position in view-box space.
pub type Point = Coord<f64>;

/// A region outline made of one or more rings, filled with the nonzero
/// winding rule. Each ring is stored as an exterior-only polygon so its
/// orientation survives.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    shape: MultiPolygon<f64>,
    /// +1 or -1 per ring by orientation, 0 for degenerate rings.
    windings: Vec<i32>,
    bounds: Option<Rect<f64>>,
}

impl Outline {
    pub fn new(shape: impl Into<MultiPolygon<f64>>) -> Self {
        let shape = shape.into();
        let windings = shape
            .0
            .iter()
            .map(|ring| {
                let area = ring.signed_area();
                if area > 0.0 {
                    1
                } else if area < 0.0 {
                    -1
                } else {
                    0
                }
            })
            .collect();
        let bounds = shape.bounding_rect();
        Self {
            shape,
            windings,
            bounds,
        }
    }

    /// Nonzero point containment across all rings. Points on a ring's
    /// boundary count as inside that ring.
    pub fn contains(&self, p: Point) -> bool {
        match self.bounds {
            Some(bounds) if bounds.intersects(&p) => {
                let winding: i32 = self
                    .shape
                    .0
                    .iter()
                    .zip(&self.windings)
                    .filter(|(ring, _)| ring.intersects(&p))
                    .map(|(_, winding)| winding)
                    .sum();
                winding != 0
            }
            _ => false,
        }
    }

    /// Sample points inside the outline on a grid with the given spacing.
    /// Samples sit at cell centres so shared borders are not double-filled.
    pub fn fill_samples(&self, step_x: f64, step_y: f64) -> Vec<(f64, f64)> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        if step_x <= 0.0 || step_y <= 0.0 {
            return Vec::new();
        }

        let (min, max) = (bounds.min(), bounds.max());
        let mut samples = Vec::new();
        let start_x = (min.x / step_x).floor() * step_x + step_x / 2.0;
        let start_y = (min.y / step_y).floor() * step_y + step_y / 2.0;
        let mut y = start_y;
        while y <= max.y {
            let mut x = start_x;
            while x <= max.x {
                if self.contains(Point { x, y }) {
                    samples.push((x, y));
                }
                x += step_x;
            }
            y += step_y;
        }
        samples
    }

    /// All edges of all rings, closing edges included.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.shape
            .0
            .iter()
            .flat_map(|ring| ring.exterior().lines())
            .map(|line| (line.start, line.end))
    }
}

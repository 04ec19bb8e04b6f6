//! Region map: outline parsing, geometry, the retained scene and the view
//! that keeps the scene in sync with the selection store.

pub mod geometry;
pub mod path;
pub mod scene;
pub mod view;

pub use geometry::{Outline, Point, VIEW_BOX_HEIGHT, VIEW_BOX_WIDTH};
pub use path::{parse_path, PathError};
pub use scene::{LabelKind, LabelNode, MapScene, ShapeNode, ShapeStyle};
pub use view::{style_for, MapView};

/// Whether a pointer event was handled by the map.
///
/// `Consumed` stops the event from reaching handlers further up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Consumed,
    Ignored,
}

//! Terminal rendering for the region selector.
//!
//! Every frame clears the hit area registry, brings the views up to date
//! with the store, then draws the selector screen. Components register
//! their clickable areas while drawing.

pub mod info_card;
pub mod interaction;
pub mod map_canvas;
pub mod quick_select;
mod selector;
pub mod status;
pub mod text;
pub mod theme;
pub mod viewport;

pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use viewport::Viewport;

use ratatui::Frame;

use crate::app::App;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();
    app.sync_views();
    selector::render_selector(frame, app);
}

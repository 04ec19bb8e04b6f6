//! Click action handler.
//!
//! Translates actions from the hit area registry into App mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click that landed on a registered hit area.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::ToggleRegion(region_id) => {
            if app.toggle_region(&region_id) {
                tracing::debug!("Click: ToggleRegion({})", region_id);
            }
        }
        ClickAction::Retry => {
            tracing::debug!("Click: Retry - reloading regions");
            app.reload();
        }
    }
}

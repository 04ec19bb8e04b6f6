//! Mouse interaction for the selector's buttons.

pub mod click_handler;
pub mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};

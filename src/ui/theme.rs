//! Color theme constants for the region selector.
//!
//! Map colors mirror the web palette of the product so the terminal map
//! reads the same: cream regions, charcoal outlines, coral accent.

use ratatui::style::Color;

// ============================================================================
// Map
// ============================================================================

/// Default region fill - cream #FFFBF0
pub const MAP_FILL: Color = Color::Rgb(0xFF, 0xFB, 0xF0);

/// Region outline - charcoal #2D3436
pub const MAP_STROKE: Color = Color::Rgb(0x2D, 0x34, 0x36);

/// Hovered region fill - pale coral #FFE5E5
pub const MAP_HOVER_FILL: Color = Color::Rgb(0xFF, 0xE5, 0xE5);

/// Map canvas background; opacity blends towards this
pub const MAP_BACKGROUND: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Label text on the map
pub const MAP_LABEL: Color = Color::Rgb(0x2D, 0x34, 0x36);

// ============================================================================
// Accent
// ============================================================================

/// Selection accent - coral #FF6B6B
pub const COLOR_ACCENT: Color = Color::Rgb(0xFF, 0x6B, 0x6B);

/// Selected button background #FFE5E5
pub const COLOR_ACCENT_SOFT: Color = Color::Rgb(0xFF, 0xE5, 0xE5);

/// Button hover background #FFF5F5
pub const COLOR_ACCENT_FAINT: Color = Color::Rgb(0xFF, 0xF5, 0xF5);

// ============================================================================
// Chrome
// ============================================================================

/// Neutral border for unselected buttons and panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::Gray;

/// Title text
pub const COLOR_HEADER: Color = Color::White;

/// Error message text
pub const COLOR_ERROR: Color = Color::Rgb(0xDC, 0x26, 0x26);

/// Blend `color` over `background` with the given opacity (0.0..=1.0).
///
/// Terminals have no alpha channel, so dimmed shapes are drawn in a
/// pre-blended color. Non-RGB colors are returned unchanged when opaque
/// and replaced by the background when fully transparent.
pub fn blend(color: Color, background: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |fg: u8, bg: u8| -> u8 {
                (fg as f64 * opacity + bg as f64 * (1.0 - opacity)).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if opacity <= 0.0 => background,
        _ => color,
    }
}

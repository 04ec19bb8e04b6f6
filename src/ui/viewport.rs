//! Viewport measurement for the desktop hover gate.
//!
//! Hover feedback is enabled only when the viewport is at least 768
//! logical pixels wide. The pixel width comes from the terminal when it
//! reports one; otherwise it is estimated from the column count.

use std::io;

/// Minimum logical width that counts as a desktop viewport.
pub const DESKTOP_MIN_WIDTH: u32 = 768;

/// Assumed cell width when the terminal does not report pixel sizes.
pub const FALLBACK_CELL_WIDTH_PX: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
    /// Width in logical pixels
    pub logical_width: u32,
}

impl Viewport {
    /// Build a viewport from a cell size and an optional reported pixel
    /// width. A reported width of zero counts as unknown.
    pub fn new(columns: u16, rows: u16, pixel_width: Option<u32>) -> Self {
        let logical_width = match pixel_width {
            Some(width) if width > 0 => width,
            _ => columns as u32 * FALLBACK_CELL_WIDTH_PX,
        };
        Self {
            columns,
            rows,
            logical_width,
        }
    }

    /// Query the attached terminal.
    pub fn detect() -> io::Result<Self> {
        match crossterm::terminal::window_size() {
            Ok(size) => Ok(Self::new(size.columns, size.rows, Some(size.width as u32))),
            Err(err) => {
                tracing::debug!("window_size unavailable ({}), falling back to cell size", err);
                let (columns, rows) = crossterm::terminal::size()?;
                Ok(Self::new(columns, rows, None))
            }
        }
    }

    /// Whether pointer hover feedback is enabled.
    pub fn is_desktop(&self) -> bool {
        self.logical_width >= DESKTOP_MIN_WIDTH
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24, None)
    }
}

//! Quick-select grid: one button per tier-1 active region.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::store::{FieldSet, RegionStore, SelectionState, ViewSubscription};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACCENT_FAINT, COLOR_ACCENT_SOFT, COLOR_BORDER, MAP_STROKE};

/// How much room each button gets. The grid shrinks to a smaller density
/// rather than dropping buttons when the screen is short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonDensity {
    /// Border, emoji line, name line, border.
    Full,
    /// Border, emoji and name on one line, border.
    Compact,
    /// A single unbordered line.
    Dense,
}

impl ButtonDensity {
    const LARGEST_FIRST: [ButtonDensity; 3] = [Self::Full, Self::Compact, Self::Dense];

    pub const fn height(self) -> u16 {
        match self {
            Self::Full => 4,
            Self::Compact => 3,
            Self::Dense => 1,
        }
    }

    /// Largest density whose `rows` fit in `budget` lines, or `Dense`.
    pub fn fitting(rows: usize, budget: u16) -> Self {
        Self::LARGEST_FIRST
            .into_iter()
            .find(|density| rows as u16 * density.height() <= budget)
            .unwrap_or(Self::Dense)
    }
}

/// Width breakpoints (columns) for the 3 / 4 / 5 column layouts.
pub const GRID_SM_WIDTH: u16 = 64;
pub const GRID_MD_WIDTH: u16 = 100;

pub const QUICK_SELECT_FIELDS: FieldSet = FieldSet::REGIONS.union(FieldSet::SELECTED);

pub fn columns_for_width(width: u16) -> usize {
    if width < GRID_SM_WIDTH {
        3
    } else if width < GRID_MD_WIDTH {
        4
    } else {
        5
    }
}

pub fn grid_rows(count: usize, width: u16) -> usize {
    count.div_ceil(columns_for_width(width))
}

/// Height needed to show `count` buttons at `width` with `density`.
pub fn grid_height(count: usize, width: u16, density: ButtonDensity) -> u16 {
    grid_rows(count, width) as u16 * density.height()
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickSelectButton {
    pub region_id: String,
    pub emoji: String,
    pub display_name: String,
    pub selected: bool,
}

#[derive(Debug)]
pub struct QuickSelectGrid {
    subscription: ViewSubscription,
    buttons: Vec<QuickSelectButton>,
}

impl QuickSelectGrid {
    pub fn new() -> Self {
        Self {
            subscription: ViewSubscription::new(QUICK_SELECT_FIELDS),
            buttons: Vec::new(),
        }
    }

    pub fn attach(&mut self, store: &mut RegionStore) {
        self.subscription.attach(store);
    }

    pub fn detach(&mut self, store: &mut RegionStore) {
        self.subscription.detach(store);
    }

    /// Rebuild the button list if regions or the selection changed.
    pub fn sync(&mut self, state: &SelectionState) -> bool {
        if !self.subscription.take() {
            return false;
        }
        self.buttons = state
            .quick_select_regions()
            .map(|region| QuickSelectButton {
                region_id: region.id.clone(),
                emoji: region.emoji.clone(),
                display_name: region.display_name.clone(),
                selected: state.is_selected(region),
            })
            .collect();
        true
    }

    pub fn buttons(&self) -> &[QuickSelectButton] {
        &self.buttons
    }

    /// Region id of the button at `index` (zero-based).
    pub fn region_at(&self, index: usize) -> Option<&str> {
        self.buttons.get(index).map(|b| b.region_id.as_str())
    }

    /// Height of the grid at `width` using the largest density that fits
    /// in `budget` lines. Falls back to one line per row.
    pub fn height_within(&self, width: u16, budget: u16) -> u16 {
        let rows = grid_rows(self.buttons.len(), width);
        rows as u16 * ButtonDensity::fitting(rows, budget).height()
    }

    /// Draw the buttons and register one hit area per button. The density
    /// is picked from the height of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
        if self.buttons.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }
        let columns = columns_for_width(area.width);
        let rows = grid_rows(self.buttons.len(), area.width);
        let density = ButtonDensity::fitting(rows, area.height);
        let row_height = density.height();

        for (row_index, row) in self.buttons.chunks(columns).enumerate() {
            let y = area.y + row_index as u16 * row_height;
            let row_area = Rect::new(area.x, y, area.width, row_height).intersection(area);
            if row_area.height == 0 {
                tracing::warn!(
                    hidden = self.buttons.len() - row_index * columns,
                    "Quick-select grid has no room left"
                );
                break;
            }
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_area);

            for (button, cell) in row.iter().zip(cells.iter()) {
                registry.register(
                    *cell,
                    ClickAction::ToggleRegion(button.region_id.clone()),
                    Some(Style::default().bg(COLOR_ACCENT_FAINT).fg(MAP_STROKE)),
                );
                let hover = registry.get_hover_style(*cell);
                render_button(frame, *cell, button, hover, density);
            }
        }
    }
}

impl Default for QuickSelectGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    button: &QuickSelectButton,
    hover: Option<Style>,
    density: ButtonDensity,
) {
    let (border_style, body_style) = if button.selected {
        (
            Style::default().fg(COLOR_ACCENT),
            Style::default()
                .bg(COLOR_ACCENT_SOFT)
                .fg(MAP_STROKE)
                .add_modifier(Modifier::BOLD),
        )
    } else if let Some(hover) = hover {
        (Style::default().fg(COLOR_ACCENT), hover)
    } else {
        (Style::default().fg(COLOR_BORDER), Style::default())
    };

    let single_line = || {
        Line::from(vec![
            Span::raw(button.emoji.clone()),
            Span::raw(" "),
            Span::raw(button.display_name.clone()),
        ])
    };

    if density == ButtonDensity::Dense {
        let style = if button.selected || hover.is_some() {
            body_style
        } else {
            border_style
        };
        frame.render_widget(
            Paragraph::new(single_line())
                .style(style)
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(body_style);

    let lines = match density {
        ButtonDensity::Full => vec![
            Line::from(button.emoji.clone()),
            Line::from(button.display_name.clone()),
        ],
        _ => vec![single_line()],
    };
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

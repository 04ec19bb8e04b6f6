//! The region selector screen: title, map panel, quick-select grid and
//! info card stacked top to bottom.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::error::FALLBACK_MESSAGE;
use crate::store::DisplayMode;
use crate::ui::info_card::INFO_CARD_HEIGHT;
use crate::ui::map_canvas::render_map;
use crate::ui::status::{render_error, render_loading};
use crate::ui::text::{KEY_HINTS, QUICK_SELECT_HEADING, SUBTITLE, TITLE};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const HEADER_HEIGHT: u16 = 3;
const MAP_MIN_HEIGHT: u16 = 8;
const QUICK_SELECT_HEADING_HEIGHT: u16 = 1;
const HINTS_HEIGHT: u16 = 1;
const INFO_CARD_MAX_WIDTH: u16 = 72;

pub fn render_selector(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let card_height = if app.info_card.is_visible() {
        INFO_CARD_HEIGHT
    } else {
        0
    };
    // Buttons shrink before the map gives up its minimum; the map takes
    // whatever is left after that.
    let grid_budget = area
        .height
        .saturating_sub(HEADER_HEIGHT + HINTS_HEIGHT + QUICK_SELECT_HEADING_HEIGHT)
        .saturating_sub(card_height + MAP_MIN_HEIGHT);
    let grid_height = app.quick_select.height_within(area.width, grid_budget);
    let quick_select_height = if grid_height > 0 {
        grid_height + QUICK_SELECT_HEADING_HEIGHT
    } else {
        0
    };

    let [header, map_panel, quick_select, info_card, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(quick_select_height),
        Constraint::Length(card_height),
        Constraint::Length(HINTS_HEIGHT),
    ])
    .areas(area);

    render_header(frame, header);
    render_map_panel(frame, map_panel, app);

    if quick_select.height > 0 {
        let [heading, grid] =
            Layout::vertical([Constraint::Length(QUICK_SELECT_HEADING_HEIGHT), Constraint::Fill(1)])
                .areas(quick_select);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                QUICK_SELECT_HEADING,
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ))),
            heading,
        );
        app.quick_select.render(frame, grid, &mut app.hit_registry);
    }

    if info_card.height > 0 {
        let [card] = Layout::horizontal([Constraint::Max(INFO_CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(info_card);
        app.info_card.render(frame, card);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))))
            .alignment(Alignment::Center),
        hints,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// The map panel switches on the display mode: spinner, error with retry,
/// or the map canvas.
fn render_map_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = app.store.state();
    match state.display_mode() {
        DisplayMode::Loading => {
            app.map_area = None;
            render_loading(frame, inner, app.spinner_frame);
        }
        DisplayMode::Error => {
            app.map_area = None;
            let message = state
                .error
                .clone()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            render_error(frame, inner, &message, &mut app.hit_registry);
        }
        DisplayMode::Ready => {
            app.map_area = Some(inner);
            render_map(frame, inner, app.map.scene());
        }
    }
}

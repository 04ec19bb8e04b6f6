//! Loading and error states of the map panel.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::text::{LOADING_MESSAGE, RETRY_LABEL};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

pub fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_char(spinner_frame).to_string(),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(LOADING_MESSAGE, Style::default().fg(COLOR_DIM))),
    ];
    let [middle] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}

/// Error message with a retry button underneath. The button is registered
/// as a [`ClickAction::Retry`] hit area.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, registry: &mut HitAreaRegistry) {
    let button_width = RETRY_LABEL.width() as u16 + 6;
    let [message_area, _, button_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ERROR),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        message_area,
    );

    let [button_area] = Layout::horizontal([Constraint::Length(button_width)])
        .flex(Flex::Center)
        .areas(button_row);
    registry.register(
        button_area,
        ClickAction::Retry,
        Some(Style::default().add_modifier(Modifier::REVERSED)),
    );
    let hover = registry.get_hover_style(button_area).unwrap_or_default();

    let button = Paragraph::new(Line::from(Span::styled(
        RETRY_LABEL,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_ACCENT))
            .style(Style::default().bg(COLOR_ACCENT).patch(hover)),
    );
    frame.render_widget(button, button_area);
}

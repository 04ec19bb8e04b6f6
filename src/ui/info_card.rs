//! Info card for the selected region. Renders nothing without a selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use crate::store::{FieldSet, RegionStore, SelectionState, ViewSubscription};
use crate::ui::text::{INFO_CARD_TITLE, INFO_KEYWORDS_LABEL, INFO_PLACES_LABEL, INFO_TIER_LABEL};
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACCENT_SOFT, COLOR_DIM, COLOR_HEADER};

/// Rows the card needs including its border.
pub const INFO_CARD_HEIGHT: u16 = 8;

/// Display strings for one selected region.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoCard {
    pub emoji: String,
    pub display_name: String,
    pub popularity: String,
    pub places: String,
    pub tier: String,
    pub keywords: Vec<String>,
    pub coordinates: String,
}

impl InfoCard {
    pub fn project(state: &SelectionState) -> Option<Self> {
        let region = state.selected_region.as_ref()?;
        Some(Self {
            emoji: region.emoji.clone(),
            display_name: region.display_name.clone(),
            popularity: format!("인기도: {}점", region.popularity_score),
            places: format!("{}곳", region.available_places_count),
            tier: format!("Tier {}", region.tier),
            keywords: region.keywords.iter().map(|k| format!("#{k}")).collect(),
            coordinates: format!(
                "좌표: {:.4}, {:.4}",
                region.coordinates.latitude, region.coordinates.longitude
            ),
        })
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(COLOR_DIM);
        let value = Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD);

        let mut tags = vec![Span::styled(format!("{INFO_KEYWORDS_LABEL}  "), label)];
        for (i, keyword) in self.keywords.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.push(Span::styled(
                keyword.clone(),
                Style::default().fg(COLOR_ACCENT).bg(COLOR_ACCENT_SOFT),
            ));
        }

        vec![
            Line::from(vec![
                Span::raw(format!("{} ", self.emoji)),
                Span::styled(
                    self.display_name.clone(),
                    Style::default()
                        .fg(COLOR_HEADER)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(self.popularity.clone(), label)),
            Line::from(vec![
                Span::styled(format!("{INFO_PLACES_LABEL} "), label),
                Span::styled(self.places.clone(), value),
                Span::raw("   "),
                Span::styled(format!("{INFO_TIER_LABEL} "), label),
                Span::styled(self.tier.clone(), value),
            ]),
            Line::from(tags),
            Line::from(""),
            Line::from(Span::styled(self.coordinates.clone(), label)),
        ]
    }
}

#[derive(Debug)]
pub struct InfoCardView {
    subscription: ViewSubscription,
    card: Option<InfoCard>,
}

impl InfoCardView {
    pub fn new() -> Self {
        Self {
            subscription: ViewSubscription::new(FieldSet::SELECTED),
            card: None,
        }
    }

    pub fn attach(&mut self, store: &mut RegionStore) {
        self.subscription.attach(store);
    }

    pub fn detach(&mut self, store: &mut RegionStore) {
        self.subscription.detach(store);
    }

    pub fn sync(&mut self, state: &SelectionState) -> bool {
        if !self.subscription.take() {
            return false;
        }
        self.card = InfoCard::project(state);
        true
    }

    pub fn card(&self) -> Option<&InfoCard> {
        self.card.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.card.is_some()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(card) = &self.card else {
            return;
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_ACCENT))
            .title(format!(" {INFO_CARD_TITLE} "));
        let paragraph = Paragraph::new(card.lines())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Default for InfoCardView {
    fn default() -> Self {
        Self::new()
    }
}

//! Landing page: hero text and three feature cards

use newsdesk_app::pages::landing::{HERO_SUBTITLE, HERO_TITLE};
use newsdesk_app::pages::{FeatureCard, LandingState, FEATURE_CARDS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::layout::centered_column;
use crate::theme::styles;

/// Below this width the cards stack vertically
const ROW_MIN_WIDTH: u16 = 66;
const CARD_HEIGHT: u16 = 7;
const STACKED_CARD_HEIGHT: u16 = 4;
const HERO_MAX_WIDTH: u16 = 90;

pub struct LandingView<'a> {
    state: &'a LandingState,
    focused: bool,
}

impl<'a> LandingView<'a> {
    pub fn new(state: &'a LandingState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Widget for LandingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(area, HERO_MAX_WIDTH);
        let [_, hero, _, cards] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(vec![
            Line::from(Span::styled(HERO_TITLE, styles::title())),
            Line::default(),
            Line::from(Span::styled(HERO_SUBTITLE, styles::text_secondary())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(hero, buf);

        if cards.width >= ROW_MIN_WIDTH {
            let cards = Rect {
                height: cards.height.min(CARD_HEIGHT),
                ..cards
            };
            let slots = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards);
            for (index, (card, slot)) in FEATURE_CARDS.iter().zip(slots.iter()).enumerate() {
                self.render_card(card, index, *slot, buf, true);
            }
        } else {
            let slots =
                Layout::vertical([Constraint::Length(STACKED_CARD_HEIGHT); 3]).split(cards);
            for (index, (card, slot)) in FEATURE_CARDS.iter().zip(slots.iter()).enumerate() {
                self.render_card(card, index, *slot, buf, false);
            }
        }
    }
}

impl LandingView<'_> {
    fn render_card(
        &self,
        card: &FeatureCard,
        index: usize,
        area: Rect,
        buf: &mut Buffer,
        with_description: bool,
    ) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let selected = self.state.selected == index;
        let block = styles::glass_block(self.focused && selected)
            .title(format!(" {} {} ", card.icon, card.title))
            .title_style(styles::title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let action_style = if self.focused && selected {
            styles::selected()
        } else {
            styles::accent()
        };

        // Action label pinned to the last row, description above it
        let action_row = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        Line::from(Span::styled(format!(" {} ", card.action), action_style))
            .render(action_row, buf);

        if with_description && inner.height > 2 {
            let description = Rect {
                height: inner.height - 2,
                ..inner
            };
            Paragraph::new(Span::styled(card.description, styles::text_secondary()))
                .wrap(Wrap { trim: true })
                .render(description, buf);
        }
    }
}

//! Navigation bar: logo on the left, route links on the right

use newsdesk_app::{Focus, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const LOGO: &str = "📰 AI News Aggregator";

/// Header with the logo (home link) and one link per feature page
pub struct NavBar {
    active: Route,
    focus: Focus,
    cursor: usize,
}

impl NavBar {
    pub fn new(active: Route, focus: Focus, cursor: usize) -> Self {
        Self {
            active,
            focus,
            cursor,
        }
    }

    fn link_style(&self, route: Route) -> Style {
        // Cursor wins over the active highlight while the bar has focus
        if self.focus == Focus::Nav && self.cursor == route.index() {
            return styles::selected();
        }
        if route == self.active {
            return styles::accent_bold().add_modifier(Modifier::UNDERLINED);
        }
        styles::text_secondary()
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focus == Focus::Nav)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let logo_style = if self.focus == Focus::Nav && self.cursor == Route::Landing.index() {
            styles::selected()
        } else {
            styles::accent_bold()
        };
        let left = Line::from(vec![Span::raw(" "), Span::styled(LOGO, logo_style)]);

        let mut right_spans = Vec::new();
        for route in Route::ALL.into_iter().filter(|r| *r != Route::Landing) {
            right_spans.push(Span::styled(route.label(), self.link_style(route)));
            right_spans.push(Span::raw("  "));
        }
        let right = Line::from(right_spans);

        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        buf.set_line(row.x, row.y, &left, row.width);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;
        // Links drop out on narrow terminals rather than overlapping the logo
        if left_width + right_width < row.width {
            let x = row.x + row.width - right_width;
            buf.set_line(x, row.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(bar: NavBar) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(bar, term.area());
        term
    }

    fn style_of(term: &TestTerminal, text: &str) -> Style {
        term.style_of(text).expect("text not rendered")
    }

    #[test]
    fn test_renders_logo_and_links() {
        let term = render(NavBar::new(Route::Landing, Focus::Content, 0));
        assert!(term.buffer_contains("AI News Aggregator"));
        assert!(term.buffer_contains("Subscribe"));
        assert!(term.buffer_contains("Chat"));
        assert!(term.buffer_contains("Summarize"));
    }

    #[test]
    fn test_active_route_highlighted() {
        let term = render(NavBar::new(Route::Chat, Focus::Content, Route::Chat.index()));
        let chat = style_of(&term, "Chat");
        let summarize = style_of(&term, "Summarize");
        assert!(chat.add_modifier.contains(Modifier::UNDERLINED));
        assert!(!summarize.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_cursor_shown_when_focused() {
        let term = render(NavBar::new(
            Route::Chat,
            Focus::Nav,
            Route::Summarize.index(),
        ));
        assert_eq!(style_of(&term, "Summarize").bg, Some(palette::ACCENT));
        assert_ne!(style_of(&term, "Chat").bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_narrow_terminal_keeps_logo() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(NavBar::new(Route::Landing, Focus::Content, 0), term.area());
        assert!(term.buffer_contains("AI News"));
        assert!(!term.buffer_contains("Summarize"));
    }
}

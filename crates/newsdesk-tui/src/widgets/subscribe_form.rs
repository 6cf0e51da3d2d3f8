//! Subscribe page: email field, submit button and status line

use newsdesk_app::pages::subscribe::{EMAIL_PLACEHOLDER, SUBSCRIBE_TITLE};
use newsdesk_app::pages::SubscribeState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::layout::centered_column;
use crate::theme::styles;

const FORM_WIDTH: u16 = 60;
pub const FIELD_TITLE: &str = " Email ";
pub const SUBSCRIBE_BLURB: &str = "Get the week's AI news in your inbox every Monday.";

pub struct SubscribeForm<'a> {
    state: &'a SubscribeState,
    focused: bool,
}

impl<'a> SubscribeForm<'a> {
    pub fn new(state: &'a SubscribeState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn field_line(&self) -> Line<'a> {
        let editable = self.focused && !self.state.submitting;
        if self.state.email.is_empty() {
            let mut spans = vec![Span::styled(EMAIL_PLACEHOLDER, styles::text_muted())];
            if editable {
                spans.insert(0, Span::styled("▏", styles::accent()));
            }
            return Line::from(spans);
        }

        let style = if self.state.submitting {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![Span::styled(self.state.email.as_str(), style)];
        if editable {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let style = if self.state.submitting {
            styles::text_muted()
        } else if self.focused {
            styles::selected()
        } else {
            styles::accent()
        };
        Line::from(Span::styled(
            format!(" {} ", self.state.button_label()),
            style,
        ))
    }
}

impl Widget for SubscribeForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(area, FORM_WIDTH);
        let [_, title, blurb, _, field, button, _, hint, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        Line::from(Span::styled(SUBSCRIBE_TITLE, styles::title()))
            .alignment(Alignment::Center)
            .render(title, buf);
        Line::from(Span::styled(SUBSCRIBE_BLURB, styles::text_secondary()))
            .alignment(Alignment::Center)
            .render(blurb, buf);

        let field_block =
            styles::glass_block(self.focused && !self.state.submitting).title(FIELD_TITLE);
        let field_inner = field_block.inner(field);
        field_block.render(field, buf);
        self.field_line().render(field_inner, buf);

        self.button_line()
            .alignment(Alignment::Right)
            .render(button, buf);

        if let Some(validation) = &self.state.validation_error {
            Line::from(Span::styled(validation.as_str(), styles::status_yellow()))
                .render(hint, buf);
        }

        if let Some(line) = &self.state.status {
            let style = if line.is_error() {
                styles::status_red()
            } else {
                styles::status_green()
            };
            Paragraph::new(Span::styled(line.text(), style))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(status, buf);
        }
    }
}

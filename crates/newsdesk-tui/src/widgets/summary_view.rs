//! Summarize page: the latest digest rendered as markdown

use newsdesk_app::pages::summarize::{SUMMARY_LOADING_TEXT, SUMMARY_TITLE};
use newsdesk_app::pages::{SummaryState, SummaryView as Body};
use newsdesk_app::scroll_state::ScrollState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::chat_view::render_scroll_markers;
use super::markdown;
use super::wrap::wrap_lines;
use crate::theme::styles;

pub struct SummaryPanel<'a> {
    summary: &'a SummaryState,
    focused: bool,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a SummaryState, focused: bool) -> Self {
        Self { summary, focused }
    }

    /// Body lines for `width` columns
    fn body_lines(&self, width: usize) -> Vec<Line<'static>> {
        let lines = match self.summary.view() {
            Body::Loading => vec![Line::from(Span::styled(
                SUMMARY_LOADING_TEXT,
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)],
            Body::Error(error) => vec![Line::from(Span::styled(
                error.to_string(),
                styles::status_red(),
            ))
            .alignment(Alignment::Center)],
            Body::Summary(text) => markdown::to_lines(text),
        };
        wrap_lines(&lines, width)
    }
}

impl StatefulWidget for SummaryPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let block = styles::glass_block(self.focused)
            .title(format!(" {SUMMARY_TITLE} "))
            .title_style(styles::title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        // One column of padding each side
        let body = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let lines = self.body_lines(body.width as usize);
        scroll.update_content_size(lines.len(), body.height as usize);
        let offset = u16::try_from(scroll.offset).unwrap_or(u16::MAX);
        Paragraph::new(lines).scroll((offset, 0)).render(body, buf);
        render_scroll_markers(scroll, inner, buf);
    }
}

/// Render a [`SummaryState`] with its own scroll state
pub fn render_summary(summary: &mut SummaryState, focused: bool, area: Rect, buf: &mut Buffer) {
    let mut scroll = std::mem::take(&mut summary.scroll);
    SummaryPanel::new(summary, focused).render(area, buf, &mut scroll);
    summary.scroll = scroll;
}

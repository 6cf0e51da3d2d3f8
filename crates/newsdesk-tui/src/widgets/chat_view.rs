//! Chat page: scrollable transcript above a multi-line input box

use newsdesk_app::pages::chat::{CHAT_EMPTY_PLACEHOLDER, CHAT_TITLE};
use newsdesk_app::pages::ChatState;
use newsdesk_app::scroll_state::ScrollState;
use newsdesk_core::{substitute_emoji_tokens, ChatMessage, Role, TextDirection};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::markdown;
use super::wrap::wrap_lines;
use crate::theme::{palette, styles};

pub const INPUT_TITLE: &str = " Message ";
pub const SEND_HINT: &str = " Enter send · Shift+Enter newline ";
pub const INPUT_PLACEHOLDER: &str = "Ask about the latest AI news";
pub const RTL_TAG: &str = " [RTL]";
const CURSOR: &str = "▏";
/// Rows of input text shown before the box scrolls
const MAX_INPUT_ROWS: usize = 4;

/// Renders the fields of a [`ChatState`]. The transcript scroll position is
/// the widget state, so the view borrows the other fields separately.
pub struct ChatView<'a> {
    messages: &'a [ChatMessage],
    input: &'a str,
    loading: bool,
    focused: bool,
    dots: &'a str,
}

impl<'a> ChatView<'a> {
    pub fn new(messages: &'a [ChatMessage], input: &'a str) -> Self {
        Self {
            messages,
            input,
            loading: false,
            focused: false,
            dots: ".",
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether the input box has keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Loading indicator frame
    pub fn dots(mut self, dots: &'a str) -> Self {
        self.dots = dots;
        self
    }

    /// Render `chat` with its own scroll state
    pub fn render_chat(
        chat: &mut ChatState,
        focused: bool,
        dots: &str,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let ChatState {
            messages,
            input,
            loading,
            scroll,
            input_focused,
            ..
        } = chat;
        ChatView::new(messages, input)
            .loading(*loading)
            .focused(focused && *input_focused)
            .dots(dots)
            .render(area, buf, scroll);
    }

    fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    fn input_lines(&self, width: usize) -> Vec<Line<'static>> {
        if self.input.is_empty() && !self.focused {
            return vec![Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                styles::text_muted(),
            ))];
        }

        let style = if self.loading {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        let mut lines: Vec<Line<'static>> = self
            .input
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect();
        if self.focused && !self.loading {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }
        wrap_lines(&lines, width)
    }
}

impl StatefulWidget for ChatView<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ScrollState) {
        let block = styles::glass_block(false)
            .title(format!(" {CHAT_TITLE} "))
            .title_style(styles::title());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width < 4 {
            return;
        }

        let text_width = inner.width.saturating_sub(2) as usize;
        let input_lines = self.input_lines(text_width);
        let input_rows = input_lines.len().clamp(1, MAX_INPUT_ROWS);

        let [transcript_area, input_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(input_rows as u16 + 2),
        ])
        .areas(inner);

        // Transcript
        let lines = transcript_lines(
            self.messages,
            self.loading,
            self.dots,
            transcript_area.width as usize,
        );
        scroll.update_content_size(lines.len(), transcript_area.height as usize);
        let offset = u16::try_from(scroll.offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(transcript_area, buf);
        render_scroll_markers(scroll, transcript_area, buf);

        // Input box
        let hint_style = if self.can_send() {
            styles::accent()
        } else {
            styles::text_muted()
        };
        let input_block = styles::glass_block(self.focused && !self.loading)
            .title(INPUT_TITLE)
            .title_bottom(Line::from(Span::styled(SEND_HINT, hint_style)).right_aligned());
        let input_inner = input_block.inner(input_area);
        input_block.render(input_area, buf);

        let input_offset = input_lines.len().saturating_sub(input_rows);
        Paragraph::new(input_lines)
            .scroll((input_offset as u16, 0))
            .render(input_inner, buf);
    }
}

/// Wrapped transcript lines for `width` columns.
///
/// Assistant content goes through emoji substitution and then markdown;
/// right-to-left replies are right-aligned and tagged.
pub fn transcript_lines(
    messages: &[ChatMessage],
    loading: bool,
    dots: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if messages.is_empty() && !loading {
        lines.push(
            Line::from(Span::styled(CHAT_EMPTY_PLACEHOLDER, styles::text_muted()))
                .alignment(Alignment::Center),
        );
        return wrap_lines(&lines, width);
    }

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(message_lines(message));
    }

    if loading {
        if !messages.is_empty() {
            lines.push(Line::default());
        }
        lines.push(label_line(Role::Assistant, TextDirection::Ltr));
        lines.push(Line::from(Span::styled(
            dots.to_string(),
            styles::accent_bold(),
        )));
    }

    wrap_lines(&lines, width)
}

fn message_lines(message: &ChatMessage) -> Vec<Line<'static>> {
    let direction = message.direction();
    let mut lines = vec![label_line(message.role, direction)];

    match message.role {
        // Plain text with emoji, no markdown
        Role::User => lines.extend(
            substitute_emoji_tokens(&message.content)
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), styles::text_primary()))),
        ),
        Role::Assistant => {
            lines.extend(markdown::to_lines(&substitute_emoji_tokens(&message.content)))
        }
    }

    if direction.is_rtl() {
        for line in &mut lines {
            line.alignment = Some(Alignment::Right);
        }
    }
    lines
}

fn label_line(role: Role, direction: TextDirection) -> Line<'static> {
    let color = match role {
        Role::User => palette::USER_LABEL,
        Role::Assistant => palette::ASSISTANT_LABEL,
    };
    let mut spans = vec![Span::styled(
        role.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if direction.is_rtl() {
        spans.push(Span::styled(RTL_TAG, styles::text_muted()));
    }
    Line::from(spans)
}

/// Arrows in the right column when content continues off-screen
pub(crate) fn render_scroll_markers(scroll: &ScrollState, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let x = area.x + area.width - 1;
    if scroll.has_more_above() {
        buf.set_string(x, area.y, "▲", styles::text_muted());
    }
    if scroll.has_more_below() {
        buf.set_string(x, area.y + area.height - 1, "▼", styles::text_muted());
    }
}

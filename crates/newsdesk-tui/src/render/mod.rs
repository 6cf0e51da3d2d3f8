//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use newsdesk_app::{AppState, Focus, Page};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{self, ChatView, Footer, LandingView, NavBar, SubscribeForm};

/// Render the complete UI (View function in TEA)
///
/// Only scroll positions are written back to the state, once the
/// content height for this frame is known.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    view_with_footer(frame, state, Footer::current());
}

/// As [`view`] with a fixed footer, for deterministic output
pub fn view_with_footer(frame: &mut Frame, state: &mut AppState, footer: Footer) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        NavBar::new(state.route(), state.focus, state.nav_cursor),
        areas.header,
    );

    let focused = state.focus == Focus::Content;
    let dots = state.loading_dots();
    match &mut state.page {
        Page::Landing(landing) => {
            frame.render_widget(LandingView::new(landing, focused), areas.content)
        }
        Page::Subscribe(subscribe) => {
            frame.render_widget(SubscribeForm::new(subscribe, focused), areas.content)
        }
        Page::Chat(chat) => {
            ChatView::render_chat(chat, focused, dots, areas.content, frame.buffer_mut())
        }
        Page::Summarize(summary) => {
            widgets::render_summary(summary, focused, areas.content, frame.buffer_mut())
        }
    }

    frame.render_widget(footer, areas.footer);
}

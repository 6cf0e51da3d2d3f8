//! Full-screen rendering tests

use super::*;
use crate::test_utils::{create_test_state_on, TestTerminal};
use newsdesk_app::handler::update;
use newsdesk_app::message::Message;
use newsdesk_app::pages::chat::CHAT_ERROR_TEXT;
use newsdesk_app::pages::landing::HERO_TITLE;
use newsdesk_app::pages::subscribe::SUBSCRIBE_TITLE;
use newsdesk_app::pages::summarize::{SUMMARY_LOADING_TEXT, SUMMARY_PLACEHOLDER};
use newsdesk_app::{InputKey, Route};

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view_with_footer(frame, state, Footer::new(2025)));
}

fn send(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

#[test]
fn test_landing_screen() {
    let mut state = AppState::new();
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("AI News Aggregator"));
    assert!(term.buffer_contains(HERO_TITLE));
    assert!(term.buffer_contains("Start Chatting"));
    assert!(term.line_contains(23, "2025 AI News Aggregator. All rights reserved."));
}

#[test]
fn test_every_route_renders_its_page() {
    let cases = [
        (Route::Landing, HERO_TITLE),
        (Route::Subscribe, SUBSCRIBE_TITLE),
        (Route::Chat, "AI News Chatbot"),
        (Route::Summarize, SUMMARY_LOADING_TEXT),
    ];
    for (route, marker) in cases {
        let mut state = create_test_state_on(route);
        let mut term = TestTerminal::new();
        draw(&mut term, &mut state);
        assert!(term.buffer_contains(marker), "{route}: {marker}");
    }
}

#[test]
fn test_chat_conversation_screen() {
    let mut state = create_test_state_on(Route::Chat);
    for c in "Hello".chars() {
        send(&mut state, Message::Key(InputKey::Char(c)));
    }
    send(&mut state, Message::Key(InputKey::Enter));

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Hello"));
    assert!(term.buffer_contains("Assistant"));

    let mount_id = state.mount_id;
    send(
        &mut state,
        Message::ChatReplyFailed {
            mount_id,
            error: "connection refused".to_string(),
        },
    );
    draw(&mut term, &mut state);
    assert!(term.buffer_contains(CHAT_ERROR_TEXT));
    assert!(!term.buffer_contains("connection refused"));
}

#[test]
fn test_summary_screen() {
    let mut state = create_test_state_on(Route::Summarize);
    let mount_id = state.mount_id;
    send(
        &mut state,
        Message::SummaryReceived {
            mount_id,
            summary: None,
        },
    );

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);
    assert!(term.buffer_contains(SUMMARY_PLACEHOLDER));
}

#[test]
fn test_nav_focus_highlights_cursor() {
    let mut state = create_test_state_on(Route::Chat);
    send(&mut state, Message::FocusNav);
    send(&mut state, Message::NavNext);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);
    let summarize = term.style_of("Summarize").unwrap();
    assert_eq!(summarize.bg, Some(palette::ACCENT));
}

#[test]
fn test_compact_terminal() {
    for route in Route::ALL {
        let mut state = create_test_state_on(route);
        let mut term = TestTerminal::compact();
        draw(&mut term, &mut state);
        assert!(term.buffer_contains("AI News"), "{route}");
    }
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    for route in Route::ALL {
        let mut state = create_test_state_on(route);
        let mut term = TestTerminal::with_size(12, 4);
        draw(&mut term, &mut state);
    }
}

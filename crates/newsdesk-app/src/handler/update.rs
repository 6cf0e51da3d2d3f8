//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::pages::Page;
use crate::route::Route;
use crate::state::{AppPhase, AppState, Focus, MountId};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => paste(state, text),

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quitting from {} (mount {})", state.route(), state.mount_id);
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigate(state, route),

        Message::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Nav => Focus::Content,
                Focus::Content => Focus::Nav,
            };
            if state.focus == Focus::Nav {
                state.nav_cursor = state.route().index();
            }
            UpdateResult::none()
        }

        Message::FocusNav => {
            state.focus = Focus::Nav;
            state.nav_cursor = state.route().index();
            UpdateResult::none()
        }

        Message::NavPrevious => {
            let len = Route::ALL.len();
            state.nav_cursor = (state.nav_cursor + len - 1) % len;
            UpdateResult::none()
        }

        Message::NavNext => {
            state.nav_cursor = (state.nav_cursor + 1) % Route::ALL.len();
            UpdateResult::none()
        }

        Message::NavActivate => match Route::from_index(state.nav_cursor) {
            Some(route) => UpdateResult::message(Message::Navigate(route)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Landing
        // ─────────────────────────────────────────────────────────
        Message::LandingNext => {
            if let Page::Landing(landing) = &mut state.page {
                landing.select_next();
            }
            UpdateResult::none()
        }

        Message::LandingPrevious => {
            if let Page::Landing(landing) = &mut state.page {
                landing.select_previous();
            }
            UpdateResult::none()
        }

        Message::LandingActivate => match &state.page {
            Page::Landing(landing) => {
                UpdateResult::message(Message::Navigate(landing.selected_card().route))
            }
            _ => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Chat
        // ─────────────────────────────────────────────────────────
        Message::ChatInputChanged { text } => {
            if let Some(chat) = state.chat_mut() {
                chat.set_input(text);
            }
            UpdateResult::none()
        }

        Message::ChatSubmit => {
            let mount_id = state.mount_id;
            let backend = state.settings.chat.backend.clone();
            let Some(question) = state.chat_mut().and_then(|chat| chat.submit()) else {
                return UpdateResult::none();
            };
            state.focus = Focus::Content;
            debug!("Chat question submitted on mount {}", mount_id);
            UpdateResult::action(UpdateAction::SendChat {
                mount_id,
                question,
                backend,
            })
        }

        Message::ChatReplyReceived { mount_id, reply } => {
            if is_stale(state, mount_id, "chat reply") {
                return UpdateResult::none();
            }
            let Some(chat) = state.chat_mut() else {
                return UpdateResult::none();
            };
            chat.receive_reply(reply);
            state.focus = Focus::Content;
            UpdateResult::none()
        }

        Message::ChatReplyFailed { mount_id, error } => {
            if is_stale(state, mount_id, "chat failure") {
                return UpdateResult::none();
            }
            warn!("Chat request failed: {}", error);
            let Some(chat) = state.chat_mut() else {
                return UpdateResult::none();
            };
            chat.receive_failure();
            state.focus = Focus::Content;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Subscribe
        // ─────────────────────────────────────────────────────────
        Message::SubscribeInputChanged { text } => {
            if let Some(subscribe) = state.subscribe_mut() {
                subscribe.set_email(text);
            }
            UpdateResult::none()
        }

        Message::SubscribeSubmit => {
            let mount_id = state.mount_id;
            match state.subscribe_mut().and_then(|s| s.submit()) {
                Some(email) => UpdateResult::action(UpdateAction::Subscribe { mount_id, email }),
                None => UpdateResult::none(),
            }
        }

        Message::SubscribeCompleted { mount_id, message } => {
            if is_stale(state, mount_id, "subscription result") {
                return UpdateResult::none();
            }
            if let Some(subscribe) = state.subscribe_mut() {
                subscribe.complete(message);
            }
            UpdateResult::none()
        }

        Message::SubscribeFailed { mount_id, error } => {
            if is_stale(state, mount_id, "subscription failure") {
                return UpdateResult::none();
            }
            warn!("Subscription request failed: {}", error);
            if let Some(subscribe) = state.subscribe_mut() {
                subscribe.fail();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Summarize
        // ─────────────────────────────────────────────────────────
        Message::SummaryReceived { mount_id, summary } => {
            if is_stale(state, mount_id, "summary") {
                return UpdateResult::none();
            }
            if let Some(view) = state.summary_mut() {
                view.receive(summary);
            }
            UpdateResult::none()
        }

        Message::SummaryFailed { mount_id, error } => {
            if is_stale(state, mount_id, "summary failure") {
                return UpdateResult::none();
            }
            warn!("Summary request failed: {}", error);
            if let Some(view) = state.summary_mut() {
                view.fail();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll(state, |s| s.scroll_up(1)),
        Message::ScrollDown => scroll(state, |s| s.scroll_down(1)),
        Message::ScrollToTop => scroll(state, |s| s.scroll_to_top()),
        Message::ScrollToBottom => scroll(state, |s| s.scroll_to_bottom()),
        Message::PageUp => scroll(state, |s| s.page_up()),
        Message::PageDown => scroll(state, |s| s.page_down()),
    }
}

/// Mount a fresh page. The summarize page fetches as soon as it mounts.
fn navigate(state: &mut AppState, route: Route) -> UpdateResult {
    let mount_id = state.mount(route);
    info!("Navigated to {} (mount {})", route, mount_id);

    match route {
        Route::Summarize => UpdateResult::action(UpdateAction::FetchSummary { mount_id }),
        Route::Landing | Route::Subscribe | Route::Chat => UpdateResult::none(),
    }
}

/// Append pasted text to the focused input. Ignored while a request is in flight.
fn paste(state: &mut AppState, text: String) -> UpdateResult {
    if state.focus != Focus::Content {
        return UpdateResult::none();
    }
    match &state.page {
        Page::Chat(chat) if !chat.loading => {
            let mut input = chat.input.clone();
            input.push_str(&text.replace("\r\n", "\n"));
            UpdateResult::message(Message::ChatInputChanged { text: input })
        }
        Page::Subscribe(subscribe) if !subscribe.submitting => {
            // Single-line field
            let mut email = subscribe.email.clone();
            email.extend(text.chars().filter(|c| *c != '\r' && *c != '\n'));
            UpdateResult::message(Message::SubscribeInputChanged { text: email })
        }
        _ => UpdateResult::none(),
    }
}

fn is_stale(state: &AppState, mount_id: MountId, what: &str) -> bool {
    if state.is_current(mount_id) {
        return false;
    }
    debug!(
        "Dropping {} for mount {} (current mount {})",
        what, mount_id, state.mount_id
    );
    true
}

fn scroll(
    state: &mut AppState,
    apply: impl FnOnce(&mut crate::scroll_state::ScrollState),
) -> UpdateResult {
    match &mut state.page {
        Page::Chat(chat) => apply(&mut chat.scroll),
        Page::Summarize(summary) => apply(&mut summary.scroll),
        Page::Landing(_) | Page::Subscribe(_) => {}
    }
    UpdateResult::none()
}

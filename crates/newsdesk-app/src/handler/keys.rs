//! Key event handlers for the navigation bar and each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::pages::{ChatState, Page, SubscribeState};
use crate::route::Route;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on focus and the mounted page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Force quit from anywhere
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => return Some(Message::ToggleFocus),
        _ => {}
    }

    match state.focus {
        Focus::Nav => handle_key_nav(key),
        Focus::Content => match &state.page {
            Page::Landing(_) => handle_key_landing(key),
            Page::Subscribe(subscribe) => handle_key_subscribe(subscribe, key),
            Page::Chat(chat) => handle_key_chat(chat, key),
            Page::Summarize(_) => handle_key_summarize(key),
        },
    }
}

/// Handle key events while the navigation bar has focus
fn handle_key_nav(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Left | InputKey::Char('h') => Some(Message::NavPrevious),
        InputKey::Right | InputKey::Char('l') => Some(Message::NavNext),
        InputKey::Enter => Some(Message::NavActivate),
        InputKey::Esc | InputKey::Down => Some(Message::ToggleFocus),

        // Number keys jump straight to a route
        InputKey::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            Route::from_index(index).map(Message::Navigate)
        }

        _ => None,
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::FocusNav),
        InputKey::Up | InputKey::Left | InputKey::Char('k') => Some(Message::LandingPrevious),
        InputKey::Down | InputKey::Right | InputKey::Char('j') => Some(Message::LandingNext),
        InputKey::Enter => Some(Message::LandingActivate),
        _ => None,
    }
}

fn handle_key_summarize(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => Some(Message::FocusNav),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Handle key events in the chat page.
///
/// Editing keys do nothing while a reply is pending.
fn handle_key_chat(chat: &ChatState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FocusNav),

        // Transcript scrolling
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        _ if chat.loading => None,

        // Enter sends, Shift+Enter starts a new line
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::ShiftEnter => Some(edit_chat(chat, |text| text.push('\n'))),
        InputKey::Backspace => Some(edit_chat(chat, |text| {
            text.pop();
        })),
        InputKey::CharCtrl('u') => Some(Message::ChatInputChanged {
            text: String::new(),
        }),
        InputKey::Char(c) => Some(edit_chat(chat, |text| text.push(c))),

        _ => None,
    }
}

fn edit_chat(chat: &ChatState, edit: impl FnOnce(&mut String)) -> Message {
    let mut text = chat.input.clone();
    edit(&mut text);
    Message::ChatInputChanged { text }
}

/// Handle key events in the subscribe page.
///
/// The email field is read-only while a request is in flight.
fn handle_key_subscribe(subscribe: &SubscribeState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FocusNav),

        _ if subscribe.submitting => None,

        InputKey::Enter => Some(Message::SubscribeSubmit),
        InputKey::Backspace => {
            let mut text = subscribe.email.clone();
            text.pop();
            Some(Message::SubscribeInputChanged { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SubscribeInputChanged {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = subscribe.email.clone();
            text.push(c);
            Some(Message::SubscribeInputChanged { text })
        }

        _ => None,
    }
}

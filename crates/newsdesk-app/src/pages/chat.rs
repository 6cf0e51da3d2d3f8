//! Chat page: the conversation state machine
//!
//! `Idle -> AwaitingResponse -> Idle`. A submit appends the user message
//! optimistically and hands the question back to the handler, which turns it
//! into a request. The completion appends exactly one assistant message,
//! either the reply or [`CHAT_ERROR_TEXT`].

use newsdesk_core::ChatMessage;

use crate::scroll_state::ScrollState;

/// Shown as the assistant reply when a chat request fails for any reason
pub const CHAT_ERROR_TEXT: &str = "Error. Please try again.";

/// Shown while the conversation is empty
pub const CHAT_EMPTY_PLACEHOLDER: &str = "Ask me anything about AI news! 🚀";

pub const CHAT_TITLE: &str = "AI News Chatbot";

/// Where the conversation is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone)]
pub struct ChatState {
    /// Transcript, append-only for the lifetime of the mount
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub scroll: ScrollState,
    /// Whether the input box holds the cursor
    pub input_focused: bool,
    /// The most recent request ended in the error message
    pub last_failed: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            loading: false,
            scroll: ScrollState::following(),
            input_focused: true,
            last_failed: false,
        }
    }
}

impl ChatState {
    pub fn phase(&self) -> ChatPhase {
        if self.loading {
            ChatPhase::AwaitingResponse
        } else {
            ChatPhase::Idle
        }
    }

    /// Whether Enter would send right now
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Replace the input buffer. Ignored while awaiting a reply.
    pub fn set_input(&mut self, text: String) -> bool {
        if self.loading {
            return false;
        }
        self.input = text;
        true
    }

    /// Take the input as a question and append it to the transcript.
    ///
    /// Returns the untrimmed question, or `None` when the input is blank or a
    /// reply is still pending.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        let question = std::mem::take(&mut self.input);
        self.push(ChatMessage::user(question.clone()));
        self.last_failed = false;
        self.set_loading(true);
        Some(question)
    }

    pub fn receive_reply(&mut self, reply: String) {
        self.push(ChatMessage::assistant(reply));
        self.set_loading(false);
    }

    pub fn receive_failure(&mut self) {
        self.push(ChatMessage::assistant(CHAT_ERROR_TEXT));
        self.last_failed = true;
        self.set_loading(false);
    }

    /// Most recent assistant message, if any
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| !m.is_user())
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll.scroll_to_bottom();
    }

    fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.input_focused = true;
            self.scroll.scroll_to_bottom();
        }
    }
}

//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::route::Route;
use crate::state::MountId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for the loading animation
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Mount a fresh page for the route
    Navigate(Route),
    /// Toggle focus between the navigation bar and the page
    ToggleFocus,
    /// Move focus to the navigation bar
    FocusNav,
    /// Move the navigation bar cursor left
    NavPrevious,
    /// Move the navigation bar cursor right
    NavNext,
    /// Navigate to the route under the navigation bar cursor
    NavActivate,

    // ─────────────────────────────────────────────────────────
    // Landing Messages
    // ─────────────────────────────────────────────────────────
    LandingNext,
    LandingPrevious,
    /// Open the selected feature card
    LandingActivate,

    // ─────────────────────────────────────────────────────────
    // Chat Messages
    // ─────────────────────────────────────────────────────────
    /// Chat input text changed (full buffer)
    ChatInputChanged { text: String },
    /// Enter in the chat input
    ChatSubmit,
    ChatReplyReceived { mount_id: MountId, reply: String },
    ChatReplyFailed { mount_id: MountId, error: String },

    // ─────────────────────────────────────────────────────────
    // Subscribe Messages
    // ─────────────────────────────────────────────────────────
    /// Email field changed (full value)
    SubscribeInputChanged { text: String },
    SubscribeSubmit,
    SubscribeCompleted { mount_id: MountId, message: String },
    SubscribeFailed { mount_id: MountId, error: String },

    // ─────────────────────────────────────────────────────────
    // Summarize Messages
    // ─────────────────────────────────────────────────────────
    SummaryReceived {
        mount_id: MountId,
        summary: Option<String>,
    },
    SummaryFailed { mount_id: MountId, error: String },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (chat transcript, summary)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,
}

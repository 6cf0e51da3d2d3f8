//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` so that the handler
//! layer and headless mode never depend on crossterm.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Enter with Shift (or Alt, for terminals that cannot report Shift+Enter)
    ShiftEnter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,
}

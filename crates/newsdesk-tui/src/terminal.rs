//! Terminal setup and restoration

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use newsdesk_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

/// Terminal modes enabled on top of `ratatui::init()`
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalModes {
    /// Whether the terminal accepted keyboard enhancement (reports Shift+Enter)
    pub keyboard_enhancement: bool,
}

/// Enable bracketed paste, and keyboard enhancement where supported.
///
/// Without keyboard enhancement most terminals send Shift+Enter as a plain
/// Enter; Alt+Enter still works as the newline key there.
pub fn enable_modes() -> Result<TerminalModes> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnableBracketedPaste)?;

    let keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    if keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    debug!("Keyboard enhancement enabled: {}", keyboard_enhancement);

    Ok(TerminalModes {
        keyboard_enhancement,
    })
}

/// Undo [`enable_modes`] and restore the terminal. Errors are ignored.
pub fn restore() {
    let mut stdout = std::io::stdout();
    let _ = execute!(stdout, PopKeyboardEnhancementFlags, DisableBracketedPaste);
    ratatui::restore();
}

//! newsdesk-tui - Terminal UI for newsdesk
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from newsdesk-app and adds terminal rendering, event polling, and
//! the page widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

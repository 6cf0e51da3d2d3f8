//! newsdesk-app - Application state and orchestration for newsdesk
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the four
//! pages, the Engine that owns state and the message channel, configuration
//! loading, and the spawning of collaborator requests.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pages;
pub mod process;
pub mod route;
pub mod scroll_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use pages::Page;
pub use route::Route;
pub use state::{AppState, Focus, MountId};

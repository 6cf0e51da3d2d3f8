//! Per-page view state
//!
//! Each page owns its local state and issues at most one kind of network
//! call. Navigating replaces the whole [`Page`] value, so nothing survives a
//! remount.

pub mod chat;
pub mod landing;
pub mod subscribe;
pub mod summarize;

pub use chat::{ChatPhase, ChatState};
pub use landing::{FeatureCard, LandingState, FEATURE_CARDS};
pub use subscribe::{StatusLine, SubscribeState};
pub use summarize::{SummaryState, SummaryView};

use crate::route::Route;

/// The mounted page and its local state
#[derive(Debug, Clone)]
pub enum Page {
    Landing(LandingState),
    Subscribe(SubscribeState),
    Chat(ChatState),
    Summarize(SummaryState),
}

impl Page {
    /// Fresh state for a route
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Landing => Page::Landing(LandingState::default()),
            Route::Subscribe => Page::Subscribe(SubscribeState::default()),
            Route::Chat => Page::Chat(ChatState::default()),
            Route::Summarize => Page::Summarize(SummaryState::loading()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Landing(_) => Route::Landing,
            Page::Subscribe(_) => Route::Subscribe,
            Page::Chat(_) => Route::Chat,
            Page::Summarize(_) => Route::Summarize,
        }
    }

    /// Whether typed characters go to a text field on this page
    pub fn has_text_input(&self) -> bool {
        matches!(self, Page::Subscribe(_) | Page::Chat(_))
    }

    /// Whether the page is waiting on a collaborator
    pub fn is_busy(&self) -> bool {
        match self {
            Page::Landing(_) => false,
            Page::Subscribe(state) => state.submitting,
            Page::Chat(state) => state.loading,
            Page::Summarize(state) => state.loading,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::for_route(Route::Landing)
    }
}

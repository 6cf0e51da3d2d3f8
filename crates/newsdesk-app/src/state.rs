//! Application state (Model in TEA pattern)

use std::fmt;

use crate::config::Settings;
use crate::pages::{ChatState, Page, SubscribeState, SummaryState};
use crate::route::Route;

/// Identifies one lifetime of a mounted page.
///
/// Every request carries the id of the mount that issued it; completions for
/// any other mount are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MountId(u64);

impl MountId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The navigation bar
    Nav,
    /// The mounted page
    #[default]
    Content,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub mount_id: MountId,
    pub focus: Focus,
    /// Index into [`Route::ALL`] highlighted in the navigation bar
    pub nav_cursor: usize,
    pub settings: Settings,
    pub phase: AppPhase,
    /// Animation frame counter, advanced on every tick
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            page: Page::default(),
            mount_id: MountId::default(),
            focus: Focus::Content,
            nav_cursor: Route::Landing.index(),
            settings,
            phase: AppPhase::Running,
            tick: 0,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// Replace the page with fresh state for `route` and return the new mount id.
    pub fn mount(&mut self, route: Route) -> MountId {
        self.mount_id = self.mount_id.next();
        self.page = Page::for_route(route);
        self.focus = Focus::Content;
        self.nav_cursor = route.index();
        self.mount_id
    }

    /// Whether a completion tagged with `mount_id` belongs to the mounted page
    pub fn is_current(&self, mount_id: MountId) -> bool {
        self.mount_id == mount_id
    }

    pub fn chat(&self) -> Option<&ChatState> {
        match &self.page {
            Page::Chat(chat) => Some(chat),
            _ => None,
        }
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatState> {
        match &mut self.page {
            Page::Chat(chat) => Some(chat),
            _ => None,
        }
    }

    pub fn subscribe(&self) -> Option<&SubscribeState> {
        match &self.page {
            Page::Subscribe(subscribe) => Some(subscribe),
            _ => None,
        }
    }

    pub fn subscribe_mut(&mut self) -> Option<&mut SubscribeState> {
        match &mut self.page {
            Page::Subscribe(subscribe) => Some(subscribe),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&SummaryState> {
        match &self.page {
            Page::Summarize(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn summary_mut(&mut self) -> Option<&mut SummaryState> {
        match &mut self.page {
            Page::Summarize(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Loading indicator frame: one to three dots
    pub fn loading_dots(&self) -> &'static str {
        // Ticks arrive every 50ms; change frame every 300ms
        match (self.tick / 6) % 3 {
            0 => ".",
            1 => "..",
            _ => "...",
        }
    }
}

//! Client-visible routes

use std::fmt;

use tracing::warn;

/// One of the four pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    Subscribe,
    Chat,
    Summarize,
}

impl Route {
    /// Every route, in navigation-bar order
    pub const ALL: [Route; 4] = [Route::Landing, Route::Subscribe, Route::Chat, Route::Summarize];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Subscribe => "/subscribe",
            Route::Chat => "/chat",
            Route::Summarize => "/summarize",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Subscribe => "Subscribe",
            Route::Chat => "Chat",
            Route::Summarize => "Summarize",
        }
    }

    /// Position in [`Route::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Route::Landing => 0,
            Route::Subscribe => 1,
            Route::Chat => 2,
            Route::Summarize => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Route> {
        Route::ALL.get(index).copied()
    }

    /// Resolve a path, falling back to the landing page for unknown paths.
    ///
    /// A trailing slash is ignored, so `/chat/` resolves to `/chat`.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/" | "" => Route::Landing,
            "/subscribe" => Route::Subscribe,
            "/chat" => Route::Chat,
            "/summarize" => Route::Summarize,
            other => {
                warn!("Unknown route '{}', falling back to /", other);
                Route::Landing
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

//! Landing page: hero text and feature cards

use crate::route::Route;

pub const HERO_TITLE: &str = "Stay Ahead with the Latest AI News";
pub const HERO_SUBTITLE: &str =
    "Curated weekly digests, smart summaries, and interactive AI chat, all in one place.";

/// A card linking to one feature page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub route: Route,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: "📬",
        title: "Subscribe",
        description: "Get weekly AI news digests delivered to your inbox. Never miss an update!",
        action: "Subscribe Now",
        route: Route::Subscribe,
    },
    FeatureCard {
        icon: "💬",
        title: "Chat",
        description: "Ask our AI chatbot about the latest trends, tools, and breakthroughs in AI.",
        action: "Start Chatting",
        route: Route::Chat,
    },
    FeatureCard {
        icon: "📝",
        title: "Summarize",
        description: "Read concise, expert summaries of the most important AI news stories.",
        action: "View Summary",
        route: Route::Summarize,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingState {
    /// Index into [`FEATURE_CARDS`]
    pub selected: usize,
}

impl LandingState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FEATURE_CARDS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + FEATURE_CARDS.len() - 1) % FEATURE_CARDS.len();
    }

    pub fn selected_card(&self) -> &'static FeatureCard {
        &FEATURE_CARDS[self.selected % FEATURE_CARDS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut state = LandingState::default();
        state.select_previous();
        assert_eq!(state.selected, 2);
        state.select_next();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_cards_link_to_feature_routes() {
        let routes: Vec<Route> = FEATURE_CARDS.iter().map(|c| c.route).collect();
        assert_eq!(routes, vec![Route::Subscribe, Route::Chat, Route::Summarize]);
    }
}

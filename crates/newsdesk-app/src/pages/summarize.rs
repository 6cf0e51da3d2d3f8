//! Summarize page: one fetch per mount

use crate::scroll_state::ScrollState;

pub const SUMMARY_TITLE: &str = "Latest AI News Summary";
pub const SUMMARY_LOADING_TEXT: &str = "Loading summary...";
pub const SUMMARY_ERROR_TEXT: &str = "Error fetching summary. Please try again.";
pub const SUMMARY_PLACEHOLDER: &str = "No summary available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryState {
    pub summary: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub scroll: ScrollState,
}

/// What the page body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryView<'a> {
    Loading,
    Error(&'a str),
    /// Markdown to render
    Summary(&'a str),
}

impl Default for SummaryState {
    fn default() -> Self {
        Self::loading()
    }
}

impl SummaryState {
    /// State right after mount, with the fetch already issued
    pub fn loading() -> Self {
        Self {
            summary: None,
            loading: true,
            error: None,
            scroll: ScrollState::anchored(),
        }
    }

    /// Store a fetched summary. Missing or empty text becomes the placeholder.
    pub fn receive(&mut self, summary: Option<String>) {
        let text = summary
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string());
        self.summary = Some(text);
        self.error = None;
        self.loading = false;
        self.scroll = ScrollState::anchored();
    }

    pub fn fail(&mut self) {
        self.summary = None;
        self.error = Some(SUMMARY_ERROR_TEXT.to_string());
        self.loading = false;
    }

    pub fn view(&self) -> SummaryView<'_> {
        if self.loading {
            return SummaryView::Loading;
        }
        if let Some(error) = &self.error {
            return SummaryView::Error(error);
        }
        match &self.summary {
            Some(summary) => SummaryView::Summary(summary),
            None => SummaryView::Summary(SUMMARY_PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounts_loading() {
        let state = SummaryState::loading();
        assert_eq!(state.view(), SummaryView::Loading);
    }

    #[test]
    fn test_receive_summary() {
        let mut state = SummaryState::loading();
        state.receive(Some("# News".to_string()));
        assert_eq!(state.view(), SummaryView::Summary("# News"));
    }

    #[test]
    fn test_missing_or_empty_summary_shows_placeholder() {
        let mut state = SummaryState::loading();
        state.receive(None);
        assert_eq!(state.view(), SummaryView::Summary(SUMMARY_PLACEHOLDER));

        let mut state = SummaryState::loading();
        state.receive(Some(String::new()));
        assert_eq!(state.view(), SummaryView::Summary(SUMMARY_PLACEHOLDER));
    }

    #[test]
    fn test_failure_shows_fixed_error() {
        let mut state = SummaryState::loading();
        state.fail();
        assert_eq!(state.view(), SummaryView::Error(SUMMARY_ERROR_TEXT));
        assert!(!state.loading);
    }
}

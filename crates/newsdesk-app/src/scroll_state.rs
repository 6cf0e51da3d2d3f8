//! Vertical scroll position for the chat transcript and the summary.
//!
//! The handler layer moves the offset in response to keys; the TUI layer
//! reports content and viewport heights during render.

/// Scroll state with follow-the-bottom support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Whether new content keeps the view pinned to the bottom
    pub auto_scroll: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::following()
    }
}

impl ScrollState {
    /// Pinned to the bottom, as for a conversation
    pub fn following() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    /// Anchored at the top, as for a document
    pub fn anchored() -> Self {
        Self {
            auto_scroll: false,
            ..Self::following()
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);

        // Re-enable auto-scroll if at bottom
        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, following the bottom when auto-scroll is on
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.auto_scroll {
            self.offset = self.max_offset();
        } else if self.offset > self.max_offset() {
            self.offset = self.max_offset();
        }
    }

    /// Whether there is content above the viewport
    pub fn has_more_above(&self) -> bool {
        self.offset > 0
    }

    /// Whether there is content below the viewport
    pub fn has_more_below(&self) -> bool {
        self.offset < self.max_offset()
    }
}

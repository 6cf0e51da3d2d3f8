//! Copyright footer

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Footer {
    year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Footer for the current local year
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn text(&self) -> String {
        format!("© {} AI News Aggregator. All rights reserved.", self.year)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .style(styles::text_muted())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_text() {
        assert_eq!(
            Footer::new(2025).text(),
            "© 2025 AI News Aggregator. All rights reserved."
        );
    }

    #[test]
    fn test_footer_renders_centered() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(Footer::new(2025), term.area());
        assert!(term.buffer_contains("2025 AI News Aggregator. All rights reserved."));
        assert_eq!(term.cell_at(0, 0), Some(" "));
    }

    #[test]
    fn test_current_year() {
        let year = chrono::Local::now().year();
        assert!(Footer::current().text().contains(&year.to_string()));
    }
}

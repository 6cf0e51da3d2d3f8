//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the navigation bar: top border + links row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar with logo and route links
    pub header: Rect,

    /// The mounted page
    pub content: Rect,

    /// Copyright line
    pub footer: Rect,
}

/// Split the screen into header, page and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Center a box of at most `width` columns horizontally within `area`
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.content.y, 3);
        assert_eq!(layout.content.height, 20); // 24 - 3 - 1
        assert_eq!(layout.footer.y, 23);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_create_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 7);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.content.height, 3);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 5, 80, 10);
        let column = centered_column(area, 60);
        assert_eq!(column, Rect::new(10, 5, 60, 10));

        // Narrower than requested: use the whole width
        let column = centered_column(Rect::new(0, 0, 40, 10), 60);
        assert_eq!(column.width, 40);
        assert_eq!(column.x, 0);
    }
}

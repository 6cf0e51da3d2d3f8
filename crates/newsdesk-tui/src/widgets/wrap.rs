//! Word wrapping for styled lines
//!
//! Scrollable views need the wrapped line count before rendering, so they
//! wrap here instead of relying on `Paragraph::wrap`.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap every line to `width` columns
pub fn wrap_lines(lines: &[Line<'static>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

/// Wrap one line at word boundaries, splitting words longer than `width`.
///
/// Style and alignment of the source line carry over to every piece.
pub fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line.clone()];
    }

    let mut out = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        for token in split_words(&span.content) {
            let token_width = token.width();
            let is_space = token.chars().all(char::is_whitespace);

            if used > 0 && used + token_width > width {
                out.push(finish(std::mem::take(&mut current), line));
                used = 0;
                if is_space {
                    continue;
                }
            }

            if token_width <= width {
                push_text(&mut current, token, span.style);
                used += token_width;
                continue;
            }

            for c in token.chars() {
                let w = c.width().unwrap_or(0);
                if used > 0 && used + w > width {
                    out.push(finish(std::mem::take(&mut current), line));
                    used = 0;
                }
                let mut buf = [0u8; 4];
                push_text(&mut current, c.encode_utf8(&mut buf), span.style);
                used += w;
            }
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(finish(current, line));
    }
    out
}

/// Split into alternating runs of whitespace and non-whitespace
fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev_space = None;

    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if prev_space.is_some_and(|p| p != space) {
            tokens.push(&text[start..i]);
            start = i;
        }
        prev_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn push_text(spans: &mut Vec<Span<'static>>, text: &str, style: Style) {
    match spans.last_mut() {
        Some(last) if last.style == style => last.content.to_mut().push_str(text),
        _ => spans.push(Span::styled(text.to_string(), style)),
    }
}

fn finish(spans: Vec<Span<'static>>, source: &Line<'static>) -> Line<'static> {
    Line {
        spans,
        style: source.style,
        alignment: source.alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Alignment;
    use ratatui::style::Modifier;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_short_line_unchanged() {
        let line = Line::from("hello world");
        let wrapped = wrap_line(&line, 20);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(text_of(&wrapped[0]), "hello world");
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let line = Line::from("the quick brown fox");
        let wrapped = wrap_line(&line, 10);
        let texts: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(texts, vec!["the quick ", "brown fox"]);
    }

    #[test]
    fn test_long_word_is_split() {
        let line = Line::from("abcdefghij");
        let wrapped = wrap_line(&line, 4);
        let texts: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        // Each emoji occupies two columns
        let line = Line::from("🚀🚀🚀");
        let wrapped = wrap_line(&line, 4);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(text_of(&wrapped[0]), "🚀🚀");
    }

    #[test]
    fn test_empty_line_kept() {
        let wrapped = wrap_line(&Line::default(), 10);
        assert_eq!(wrapped.len(), 1);
        assert!(wrapped[0].spans.is_empty());
    }

    #[test]
    fn test_styles_and_alignment_preserved() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let line = Line::from(vec![Span::styled("bold words", bold), Span::raw(" plain")])
            .alignment(Alignment::Right);
        let wrapped = wrap_line(&line, 6);

        assert!(wrapped.iter().all(|l| l.alignment == Some(Alignment::Right)));
        assert_eq!(wrapped[0].spans[0].style, bold);
        assert_eq!(text_of(wrapped.last().unwrap()), "plain");
    }

    #[test]
    fn test_wrap_lines_flattens() {
        let lines = vec![Line::from("aaaa bbbb"), Line::from("cc")];
        assert_eq!(wrap_lines(&lines, 5).len(), 3);
    }
}

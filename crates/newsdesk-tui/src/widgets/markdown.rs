//! Markdown to styled terminal lines
//!
//! Covers what the collaborator services produce: headings, paragraphs,
//! nested lists, emphasis, inline and fenced code, quotes, links and rules.
//! Output lines are unwrapped; pair with [`super::wrap`].

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::{palette, styles};

const RULE_WIDTH: usize = 24;
const CODE_INDENT: &str = "  ";
const QUOTE_PREFIX: &str = "│ ";

/// Render markdown into one line per paragraph line, list item or code line
pub fn to_lines(markdown: &str) -> Vec<Line<'static>> {
    to_lines_with_style(markdown, styles::text_primary())
}

/// As [`to_lines`], with `base` applied under all markup styles
pub fn to_lines_with_style(markdown: &str, base: Style) -> Vec<Line<'static>> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut builder = Builder::new(base);
    for event in Parser::new_ext(markdown, options) {
        builder.event(event);
    }
    builder.finish()
}

struct Builder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// Next number for ordered lists, `None` for bullet lists
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    blank_pending: bool,
    link: Option<Link>,
}

struct Link {
    url: String,
    text: String,
}

impl Builder {
    fn new(base: Style) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles: vec![base],
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            blank_pending: false,
            link: None,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, patch: Style) {
        let style = self.style().patch(patch);
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn in_list(&self) -> bool {
        !self.lists.is_empty()
    }

    /// Flush the current line and emit one blank line if a block just ended
    fn start_block(&mut self) {
        self.flush_line();
        if self.blank_pending && !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.blank_pending = false;
    }

    fn end_block(&mut self) {
        self.flush_line();
        self.blank_pending = true;
    }

    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                QUOTE_PREFIX.repeat(self.quote_depth),
                Style::default().fg(palette::QUOTE_FG),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn push_text(&mut self, text: &str) {
        if let Some(link) = &mut self.link {
            link.text.push_str(text);
        }
        let style = self.style();
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.in_code_block => {
                let style = Style::default().fg(palette::CODE_FG);
                for line in text.lines() {
                    self.current.push(Span::styled(format!("{CODE_INDENT}{line}"), style));
                    self.flush_line();
                }
            }
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                let style = self.style().fg(palette::CODE_FG);
                self.current.push(Span::styled(code.to_string(), style));
            }
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.start_block();
                self.current
                    .push(Span::styled("─".repeat(RULE_WIDTH), styles::text_muted()));
                self.end_block();
            }
            Event::TaskListMarker(checked) => {
                self.push_text(if checked { "[x] " } else { "[ ] " });
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let text = html.trim_end_matches('\n').to_string();
                self.current.push(Span::styled(text, styles::text_muted()));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            // List items hold their text on the marker line
            Tag::Paragraph if self.in_list() => {}
            Tag::Paragraph => self.start_block(),
            Tag::Heading { level, .. } => {
                self.start_block();
                self.push_style(heading_style(level));
            }
            Tag::BlockQuote(_) => {
                self.start_block();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.start_block();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.current
                            .push(Span::styled(lang.to_string(), styles::text_muted()));
                        self.flush_line();
                    }
                }
            }
            Tag::List(start) => {
                if self.in_list() {
                    self.flush_line();
                } else {
                    self.start_block();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current.push(Span::styled(
                    format!("{}{}", "  ".repeat(depth), marker),
                    styles::accent(),
                ));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.push_style(
                    Style::default()
                        .fg(palette::LINK_FG)
                        .add_modifier(Modifier::UNDERLINED),
                );
                self.link = Some(Link {
                    url: dest_url.to_string(),
                    text: String::new(),
                });
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph if self.in_list() => self.flush_line(),
            TagEnd::Paragraph => self.end_block(),
            TagEnd::Heading(_) => {
                self.pop_style();
                self.end_block();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank_pending = true;
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.end_block();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
                if !self.in_list() {
                    self.blank_pending = true;
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                // Show the target unless the text already is the URL
                if let Some(link) = self.link.take() {
                    if !link.url.is_empty() && link.url != link.text {
                        self.current
                            .push(Span::styled(format!(" ({})", link.url), styles::text_muted()));
                    }
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let style = Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => style.add_modifier(Modifier::UNDERLINED),
        _ => style,
    }
}

/// Plain text of a rendered line, for tests and headless output
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

//! Text decoration for assistant output.
//!
//! Pure string functions used while rendering: emoji shortcode substitution,
//! right-to-left script detection and bullet-list detection. None of them
//! can fail.

use std::sync::LazyLock;

use regex::Regex;

/// Shortcodes and their glyphs, in substitution order.
pub const EMOJI_TOKENS: [(&str, &str); 5] = [
    (":smile:", "😊"),
    (":rocket:", "🚀"),
    (":robot:", "🤖"),
    (":star:", "⭐"),
    (":fire:", "🔥"),
];

/// A bullet line starts with a dash, star, bullet, plus, dot or ASCII digit.
static BULLET_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•0-9+.]").expect("Bullet start regex is valid"));

/// Leading run of marker characters removed from a bullet line.
static BULLET_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•0-9+.]+").expect("Bullet marker regex is valid"));

/// Lines are split on `\n` with an optional preceding `\r`.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("Line break regex is valid"));

/// Replace every known `:name:` shortcode with its emoji.
///
/// Matching is literal and case-sensitive. Unknown tokens are left alone.
pub fn substitute_emoji_tokens(text: &str) -> String {
    let mut out = text.to_string();
    for (token, glyph) in EMOJI_TOKENS {
        if out.contains(token) {
            out = out.replace(token, glyph);
        }
    }
    out
}

/// True when any character falls in the Arabic block (U+0600..=U+06FF).
pub fn detect_right_to_left_script(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Whether the trimmed line begins with a list marker.
pub fn is_bullet_line(line: &str) -> bool {
    BULLET_START.is_match(line.trim())
}

/// Markers are stripped after trimming, so indented bullets lose them too.
fn strip_bullet(line: &str) -> String {
    let stripped = BULLET_MARKERS.replace(line.trim(), "");
    substitute_emoji_tokens(stripped.trim())
}

/// One line of paragraph output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    /// Rendered with a leading `•` marker.
    pub bullet: bool,
}

/// Result of [`format_list_or_paragraphs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedText {
    /// More than two bullet lines: only those lines, markers stripped.
    List(Vec<String>),
    /// Every non-blank line, in order.
    Blocks(Vec<TextBlock>),
}

impl FormattedText {
    pub fn is_list(&self) -> bool {
        matches!(self, FormattedText::List(_))
    }

    /// Number of rendered lines
    pub fn len(&self) -> usize {
        match self {
            FormattedText::List(items) => items.len(),
            FormattedText::Blocks(blocks) => blocks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render for line-oriented output, one line per item or block.
    pub fn to_plain_text(&self) -> String {
        let lines: Vec<String> = match self {
            FormattedText::List(items) => items.iter().map(|item| format!("• {item}")).collect(),
            FormattedText::Blocks(blocks) => blocks
                .iter()
                .map(|block| {
                    if block.bullet {
                        format!("• {}", block.text)
                    } else {
                        block.text.clone()
                    }
                })
                .collect(),
        };
        lines.join("\n")
    }
}

/// Decide between list and paragraph presentation for a block of text.
///
/// Blank lines are discarded. When more than two of the remaining lines are
/// bullet lines the result is a list of just those lines; non-bullet lines
/// are dropped in that case.
pub fn format_list_or_paragraphs(text: &str) -> FormattedText {
    let lines: Vec<&str> = LINE_BREAK
        .split(text)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let bullet_count = lines.iter().filter(|line| is_bullet_line(line)).count();

    if bullet_count > 2 {
        let items = lines
            .iter()
            .filter(|line| is_bullet_line(line))
            .map(|line| strip_bullet(line))
            .collect();
        return FormattedText::List(items);
    }

    let blocks = lines
        .iter()
        .map(|line| {
            if is_bullet_line(line) {
                TextBlock {
                    text: strip_bullet(line),
                    bullet: true,
                }
            } else {
                TextBlock {
                    text: substitute_emoji_tokens(line),
                    bullet: false,
                }
            }
        })
        .collect();
    FormattedText::Blocks(blocks)
}

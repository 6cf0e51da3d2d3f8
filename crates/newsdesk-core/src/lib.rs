//! # newsdesk-core - Core Domain Types
//!
//! Foundation crate for newsdesk. Provides domain types, error handling,
//! logging setup and the text-decoration helpers used when rendering
//! assistant output.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Role`] - Author of a chat message (user or assistant)
//! - [`ChatMessage`] - One immutable entry of a chat transcript
//! - [`TextDirection`] - Left-to-right or right-to-left display direction
//!
//! ### Text Decoration (`decorate`)
//! - [`substitute_emoji_tokens()`] - Replace `:name:` tokens with emoji glyphs
//! - [`detect_right_to_left_script()`] - Arabic-block detection
//! - [`format_list_or_paragraphs()`] - Bullet list vs paragraph markup
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use newsdesk_core::prelude::*;
//! ```

pub mod decorate;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all newsdesk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use decorate::{
    detect_right_to_left_script, format_list_or_paragraphs, is_bullet_line,
    substitute_emoji_tokens, FormattedText, TextBlock, EMOJI_TOKENS,
};
pub use error::{Error, Result, ResultExt};
pub use types::{ChatMessage, Role, TextDirection};

//! Widgets for the header, footer and each page

mod chat_view;
mod footer;
mod header;
mod landing;
pub mod markdown;
mod subscribe_form;
mod summary_view;
pub mod wrap;

pub use chat_view::{transcript_lines, ChatView};
pub use footer::Footer;
pub use header::{NavBar, LOGO};
pub use landing::LandingView;
pub use subscribe_form::SubscribeForm;
pub use summary_view::{render_summary, SummaryPanel};

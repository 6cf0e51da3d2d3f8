//! Collaborator operations
//!
//! The pages reach the network only through this trait, so the update loop
//! can run against [`crate::HttpNewsApi`] or a scripted fake.

use newsdesk_core::prelude::*;

/// Operations offered by the subscription and assistant services
#[trait_variant::make(NewsApi: Send)]
pub trait LocalNewsApi {
    /// Register an email address. Returns the server's status message.
    async fn subscribe(&self, email: &str) -> Result<String>;

    /// Ask one question. Returns the assistant's reply text.
    async fn chat(&self, question: &str, backend: &str) -> Result<String>;

    /// Fetch the latest news summary.
    ///
    /// `Ok(None)` means the service answered without a summary.
    async fn summarize(&self) -> Result<Option<String>>;
}

//! # newsdesk-client - Collaborator Service Client
//!
//! HTTP access to the two services behind newsdesk: the subscription service
//! (`POST /subscribe`) and the assistant service (`POST /chat`,
//! `GET /summarize`).
//!
//! ## Public API
//!
//! - [`NewsApi`] - Async operations the pages need, `Send` variant of [`LocalNewsApi`]
//! - [`HttpNewsApi`] - `reqwest` implementation with a per-request timeout
//! - [`Endpoints`] - Validated URLs for every call
//! - [`protocol`] - JSON request and response bodies
//!
//! With the `test-helpers` feature, `test_utils::FakeNewsApi` provides a
//! scripted implementation for driving the app without a network.

pub mod api;
pub mod endpoints;
pub mod http;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{LocalNewsApi, NewsApi};
pub use endpoints::Endpoints;
pub use http::HttpNewsApi;

//! Validated URLs for each collaborator call

use std::fmt;

use newsdesk_core::prelude::*;
use url::Url;

/// Full URLs for every call, resolved once from the two base addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    subscribe: Url,
    chat: Url,
    summarize: Url,
}

impl Endpoints {
    /// Resolve endpoints from the subscription and assistant base URLs.
    ///
    /// A base may carry a path prefix (`http://host/api`); calls are resolved
    /// beneath it.
    pub fn parse(subscribe_base: &str, assistant_base: &str) -> Result<Self> {
        let subscribe_base = parse_base(subscribe_base)?;
        let assistant_base = parse_base(assistant_base)?;

        Ok(Self {
            subscribe: join(&subscribe_base, "subscribe")?,
            chat: join(&assistant_base, "chat")?,
            summarize: join(&assistant_base, "summarize")?,
        })
    }

    pub fn subscribe(&self) -> &Url {
        &self.subscribe
    }

    pub fn chat(&self) -> &Url {
        &self.chat
    }

    pub fn summarize(&self) -> &Url {
        &self.summarize
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subscribe={} chat={} summarize={}",
            self.subscribe, self.chat, self.summarize
        )
    }
}

fn parse_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(raw, "scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(Error::invalid_url(raw, "URL cannot be used as a base"));
    }

    // Without a trailing slash, join() would replace the last path segment
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn join(base: &Url, call: &str) -> Result<Url> {
    base.join(call)
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}

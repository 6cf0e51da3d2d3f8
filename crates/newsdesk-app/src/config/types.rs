//! Configuration types for newsdesk

use std::time::Duration;

use newsdesk_client::Endpoints;
use newsdesk_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub chat: ChatSettings,
}

/// Where the collaborator services live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the subscription service (`POST /subscribe`)
    #[serde(default = "default_subscribe_url")]
    pub subscribe_url: String,

    /// Base URL of the assistant service (`POST /chat`, `GET /summarize`)
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,

    /// Seconds before a request counts as failed
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            subscribe_url: default_subscribe_url(),
            assistant_url: default_assistant_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_subscribe_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_assistant_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Chat page settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatSettings {
    /// Model backend named in every chat request ("groq" or "ollama")
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

fn default_backend() -> String {
    "groq".to_string()
}

/// Values given on the command line, applied over the loaded file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub subscribe_url: Option<String>,
    pub assistant_url: Option<String>,
    pub backend: Option<String>,
}

impl Settings {
    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(url) = overrides.subscribe_url {
            self.api.subscribe_url = url;
        }
        if let Some(url) = overrides.assistant_url {
            self.api.assistant_url = url;
        }
        if let Some(backend) = overrides.backend {
            self.chat.backend = backend;
        }
        self
    }

    /// Resolve and validate the collaborator URLs
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::parse(&self.api.subscribe_url, &self.api.assistant_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.subscribe_url, "http://localhost:8000");
        assert_eq!(settings.api.assistant_url, "http://localhost:8001");
        assert_eq!(settings.request_timeout(), Duration::from_secs(60));
        assert_eq!(settings.chat.backend, "groq");
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            assistant_url: Some("http://ai.internal:9000".to_string()),
            backend: Some("ollama".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.api.subscribe_url, "http://localhost:8000");
        assert_eq!(settings.api.assistant_url, "http://ai.internal:9000");
        assert_eq!(settings.chat.backend, "ollama");
    }

    #[test]
    fn test_endpoints_from_defaults() {
        let endpoints = Settings::default().endpoints().unwrap();
        assert_eq!(endpoints.chat().as_str(), "http://localhost:8001/chat");
    }

    #[test]
    fn test_invalid_url_is_fatal() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            subscribe_url: Some("localhost:8000/x y".to_string()),
            ..Default::default()
        });
        let err = settings.endpoints().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let mut settings = Settings::default();
        settings.api.request_timeout_secs = 0;
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}

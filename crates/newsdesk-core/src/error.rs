//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // HTTP/Collaborator Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Server responded with status {status} for {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("Response from {endpoint} is missing the '{field}' field")]
    MissingField { endpoint: String, field: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Engine/Headless Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    #[error("Interrupted before the {route} page finished")]
    Interrupted { route: String },

    #[error("The {route} page ended without a result")]
    Unsettled { route: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, endpoint: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            endpoint: endpoint.into(),
        }
    }

    pub fn missing_field(endpoint: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            endpoint: endpoint.into(),
            field: field.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn interrupted(route: impl Into<String>) -> Self {
        Self::Interrupted {
            route: route.into(),
        }
    }

    pub fn unsettled(route: impl Into<String>) -> Self {
        Self::Unsettled {
            route: route.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Every collaborator failure is recoverable: the page shows its fallback
    /// text and the user may try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::HttpStatus { .. }
                | Error::MissingField { .. }
                | Error::Json(_)
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. } | Error::ChannelClosed | Error::Interrupted { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with context before propagating it
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::http("connection refused");
        assert_eq!(err.to_string(), "HTTP request failed: connection refused");

        let err = Error::http_status(502, "/chat");
        assert_eq!(
            err.to_string(),
            "Server responded with status 502 for /chat"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::missing_field("/summarize", "summary");
        assert!(err.to_string().contains("/summarize"));
        assert!(err.to_string().contains("'summary'"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::interrupted("/chat").is_fatal());
        assert!(Error::invalid_url("nope", "relative URL without a base").is_fatal());
        assert!(!Error::http("timeout").is_fatal());
    }

    #[test]
    fn test_collaborator_errors_are_recoverable() {
        assert!(Error::http("timeout").is_recoverable());
        assert!(Error::http_status(500, "/subscribe").is_recoverable());
        assert!(Error::missing_field("/chat", "response").is_recoverable());
        assert!(!Error::invalid_url("nope", "no scheme").is_recoverable());
    }

    #[test]
    fn test_headless_errors_name_the_page() {
        assert_eq!(
            Error::interrupted("/chat").to_string(),
            "Interrupted before the /chat page finished"
        );
        assert!(Error::unsettled("/summarize").to_string().contains("/summarize"));
    }

    #[test]
    fn test_context_keeps_the_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("Creating log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Subscribe page: one email field and a submit button

use std::sync::LazyLock;

use regex::Regex;

/// Shown when the subscription request fails for any reason
pub const SUBSCRIBE_ERROR_TEXT: &str = "Error subscribing. Please try again.";

pub const SUBSCRIBE_TITLE: &str = "Subscribe to Weekly Digest";
pub const SUBSCRIBE_LABEL: &str = "Subscribe";
pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const EMAIL_PLACEHOLDER: &str = "Your email";

pub const EMAIL_REQUIRED_HINT: &str = "Please fill out this field.";
pub const EMAIL_INVALID_HINT: &str = "Please enter a valid email address.";

/// HTML "valid e-mail address" production
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Email regex pattern is valid")
});

/// Check an email the way an HTML `<input type="email" required>` does.
///
/// Leading and trailing whitespace is ignored.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED_HINT);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EMAIL_INVALID_HINT);
    }
    Ok(())
}

/// Outcome of the last submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Success(String),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Success(text) | StatusLine::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeState {
    pub email: String,
    pub submitting: bool,
    pub status: Option<StatusLine>,
    pub validation_error: Option<String>,
}

impl SubscribeState {
    /// Replace the email field. Read-only while submitting.
    pub fn set_email(&mut self, email: String) -> bool {
        if self.submitting {
            return false;
        }
        self.email = email;
        self.validation_error = None;
        true
    }

    /// Start a submit.
    ///
    /// Returns the email to send, or `None` when a request is in flight or the
    /// field fails validation (the hint is stored instead).
    pub fn submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        if let Err(hint) = validate_email(&self.email) {
            self.validation_error = Some(hint.to_string());
            return None;
        }

        self.validation_error = None;
        self.status = None;
        self.submitting = true;
        Some(self.email.trim().to_string())
    }

    pub fn complete(&mut self, message: String) {
        self.status = Some(StatusLine::Success(message));
        self.submitting = false;
    }

    pub fn fail(&mut self) {
        self.status = Some(StatusLine::Error(SUBSCRIBE_ERROR_TEXT.to_string()));
        self.submitting = false;
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            SUBSCRIBING_LABEL
        } else {
            SUBSCRIBE_LABEL
        }
    }
}

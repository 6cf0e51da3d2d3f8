//! Headless mode - one request per invocation, no TUI
//!
//! Each command mounts the matching page on an [`Engine`], feeds it the same
//! messages the TUI would, and reports what the page ends up showing. With
//! `--json` the result is printed as one NDJSON event.
//!
//! # Event Format
//!
//! ```json
//! {"event":"chat_reply","question":"What's new?","reply":"• GPT news","timestamp":1704700001000}
//! {"event":"subscribe_status","email":"a@b.co","message":"Subscribed!","success":true,"timestamp":1704700002000}
//! {"event":"error","message":"Error fetching summary. Please try again.","fatal":false,"timestamp":1704700003000}
//! ```
//!
//! [`Engine`]: newsdesk_app::Engine

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub use runner::{run_command, run_headless, HeadlessCommand, Outcome};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Chat reply, formatted for line-oriented output
    ChatReply {
        question: String,
        reply: String,
        timestamp: i64,
    },

    /// Status line of the subscribe page
    SubscribeStatus {
        email: String,
        message: String,
        success: bool,
        timestamp: i64,
    },

    /// Summary markdown, or the placeholder when none was returned
    Summary { summary: String, timestamp: i64 },

    /// The page ended in its error state, or the command could not run
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match self.to_json() {
            Some(json) => json,
            None => return,
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn to_json(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                None
            }
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn chat_reply(question: &str, reply: &str) -> Self {
        Self::ChatReply {
            question: question.to_string(),
            reply: reply.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn subscribe_status(email: &str, message: &str, success: bool) -> Self {
        Self::SubscribeStatus {
            email: email.to_string(),
            message: message.to_string(),
            success,
            timestamp: Self::now(),
        }
    }

    pub fn summary(summary: &str) -> Self {
        Self::Summary {
            summary: summary.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: &str, fatal: bool) -> Self {
        Self::Error {
            message: message.to_string(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

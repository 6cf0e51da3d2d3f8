//! Scripted [`NewsApi`] for tests
//!
//! Each operation pops the next scripted outcome from its own queue. An
//! exhausted queue answers with an HTTP error so a missing script shows up as
//! a failed request rather than a hang.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use newsdesk_core::prelude::*;

use crate::api::NewsApi;

/// A call observed by [`FakeNewsApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Subscribe { email: String },
    Chat { question: String, backend: String },
    Summarize,
}

type Script<T> = Mutex<VecDeque<std::result::Result<T, String>>>;

#[derive(Debug, Default)]
pub struct FakeNewsApi {
    subscribe: Script<String>,
    chat: Script<String>,
    summarize: Script<Option<String>>,
    calls: Mutex<Vec<RecordedCall>>,
    delay: Option<Duration>,
}

impl FakeNewsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every answer, for exercising loading states.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_chat_reply(self, reply: impl Into<String>) -> Self {
        push(&self.chat, Ok(reply.into()));
        self
    }

    pub fn with_chat_failure(self, reason: impl Into<String>) -> Self {
        push(&self.chat, Err(reason.into()));
        self
    }

    pub fn with_subscribe_message(self, message: impl Into<String>) -> Self {
        push(&self.subscribe, Ok(message.into()));
        self
    }

    pub fn with_subscribe_failure(self, reason: impl Into<String>) -> Self {
        push(&self.subscribe, Err(reason.into()));
        self
    }

    pub fn with_summary(self, summary: Option<&str>) -> Self {
        push(&self.summarize, Ok(summary.map(str::to_string)));
        self
    }

    pub fn with_summary_failure(self, reason: impl Into<String>) -> Self {
        push(&self.summarize, Err(reason.into()));
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn answer<T>(&self, script: &Script<T>, what: &str) -> Result<T> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = script.lock().ok().and_then(|mut queue| queue.pop_front());
        match next {
            Some(Ok(value)) => Ok(value),
            Some(Err(reason)) => Err(Error::http(reason)),
            None => Err(Error::http(format!("no scripted {what} response"))),
        }
    }
}

fn push<T>(script: &Script<T>, outcome: std::result::Result<T, String>) {
    if let Ok(mut queue) = script.lock() {
        queue.push_back(outcome);
    }
}

impl NewsApi for FakeNewsApi {
    async fn subscribe(&self, email: &str) -> Result<String> {
        self.record(RecordedCall::Subscribe {
            email: email.to_string(),
        });
        self.answer(&self.subscribe, "subscribe").await
    }

    async fn chat(&self, question: &str, backend: &str) -> Result<String> {
        self.record(RecordedCall::Chat {
            question: question.to_string(),
            backend: backend.to_string(),
        });
        self.answer(&self.chat, "chat").await
    }

    async fn summarize(&self) -> Result<Option<String>> {
        self.record(RecordedCall::Summarize);
        self.answer(&self.summarize, "summarize").await
    }
}

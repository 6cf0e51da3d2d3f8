//! Engine - shared orchestration core for the TUI and headless runners
//!
//! Owns the application state, the message channel and the collaborator
//! client. Frontends feed it messages and render `engine.state`.

use std::sync::Arc;

use newsdesk_client::{HttpNewsApi, NewsApi};
use newsdesk_core::prelude::*;
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::route::Route;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Shared orchestration core.
///
/// Generic over the collaborator client so tests can swap in a scripted one.
pub struct Engine<A = HttpNewsApi> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources (signal handler, request tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    api: Arc<A>,
}

impl Engine<HttpNewsApi> {
    /// Build an engine that talks to the services named in `settings`.
    ///
    /// Fails when a base URL is invalid or the HTTP client cannot be built.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let endpoints = settings
            .endpoints()
            .context("Collaborator base URLs are invalid")?;
        info!("Collaborator endpoints: {}", endpoints);
        let api = HttpNewsApi::new(endpoints, settings.request_timeout())
            .context("Could not build the HTTP client")?;
        Ok(Self::with_api(settings, api))
    }
}

impl<A> Engine<A>
where
    A: NewsApi + Send + Sync + 'static,
{
    pub fn with_api(settings: Settings, api: A) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            api: Arc::new(api),
        }
    }

    /// Mount the first page
    pub fn start(&mut self, route: Route) {
        info!("Starting on {}", route);
        self.process_message(Message::Navigate(route));
    }

    /// Forward SIGINT/SIGTERM as [`Message::Quit`]
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process messages until the mounted page has no request in flight
    pub async fn settle(&mut self) -> Result<()> {
        while self.state.page.is_busy() && !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => return Err(Error::ChannelClosed),
            }
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Stop accepting messages. Request tasks still in flight finish on
    /// their own and their completions are discarded.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down on {}", self.state.route());
        self.msg_rx.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::pages::chat::CHAT_ERROR_TEXT;
    use crate::pages::summarize::SUMMARY_PLACEHOLDER;
    use crate::pages::{StatusLine, SummaryView};
    use crate::state::MountId;
    use newsdesk_client::test_utils::{FakeNewsApi, RecordedCall};
    use newsdesk_core::ChatMessage;
    use std::time::Duration;

    fn engine(api: FakeNewsApi) -> Engine<FakeNewsApi> {
        Engine::with_api(Settings::default(), api)
    }

    fn type_text(engine: &mut Engine<FakeNewsApi>, text: &str) {
        for c in text.chars() {
            engine.process_message(Message::Key(InputKey::Char(c)));
        }
    }

    #[tokio::test]
    async fn test_engine_starts_on_route() {
        let mut engine = engine(FakeNewsApi::new());
        engine.start(Route::Chat);
        assert_eq!(engine.state.route(), Route::Chat);
        assert!(!engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = engine(FakeNewsApi::new());
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = engine(FakeNewsApi::new());
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let mut engine = engine(FakeNewsApi::new().with_chat_reply("Hi there"));
        engine.start(Route::Chat);
        type_text(&mut engine, "Hello");
        engine.process_message(Message::ChatSubmit);

        // The user message is visible before the reply arrives
        assert_eq!(
            engine.state.chat().unwrap().messages,
            vec![ChatMessage::user("Hello")]
        );
        assert!(engine.state.chat().unwrap().loading);

        engine.settle().await.unwrap();

        let chat = engine.state.chat().unwrap();
        assert_eq!(
            chat.messages,
            vec![ChatMessage::user("Hello"), ChatMessage::assistant("Hi there")]
        );
        assert!(!chat.loading);
    }

    #[tokio::test]
    async fn test_chat_network_failure() {
        let mut engine = engine(FakeNewsApi::new().with_chat_failure("connection refused"));
        engine.start(Route::Chat);
        type_text(&mut engine, "Hello");
        engine.process_message(Message::ChatSubmit);
        engine.settle().await.unwrap();

        let chat = engine.state.chat().unwrap();
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[1].content, CHAT_ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_subscribe_round_trip() {
        let mut engine = engine(FakeNewsApi::new().with_subscribe_message("Subscribed!"));
        engine.start(Route::Subscribe);
        engine.process_message(Message::SubscribeInputChanged {
            text: "reader@example.com".to_string(),
        });
        engine.process_message(Message::SubscribeSubmit);
        engine.settle().await.unwrap();

        assert_eq!(
            engine.state.subscribe().unwrap().status,
            Some(StatusLine::Success("Subscribed!".to_string()))
        );
        assert_eq!(
            engine.api().calls(),
            vec![RecordedCall::Subscribe {
                email: "reader@example.com".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_summary_fetched_once_on_mount() {
        let mut engine = engine(FakeNewsApi::new().with_summary(None));
        engine.start(Route::Summarize);
        engine.settle().await.unwrap();

        assert_eq!(
            engine.state.summary().unwrap().view(),
            SummaryView::Summary(SUMMARY_PLACEHOLDER)
        );
        assert_eq!(engine.api().calls(), vec![RecordedCall::Summarize]);
    }

    #[tokio::test]
    async fn test_late_reply_after_navigation_is_dropped() {
        let api = FakeNewsApi::new()
            .with_delay(Duration::from_millis(50))
            .with_chat_reply("late");
        let mut engine = engine(api);
        engine.start(Route::Chat);
        type_text(&mut engine, "Hello");
        engine.process_message(Message::ChatSubmit);
        let stale_mount = engine.state.mount_id;

        engine.process_message(Message::Navigate(Route::Chat));
        assert_ne!(engine.state.mount_id, stale_mount);

        let msg = engine.msg_rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            Message::ChatReplyReceived { mount_id, .. } if mount_id == stale_mount
        ));
        engine.process_message(msg);

        assert!(engine.state.chat().unwrap().messages.is_empty());
    }

    #[tokio::test]
    async fn test_settle_returns_immediately_when_idle() {
        let mut engine = engine(FakeNewsApi::new());
        engine.start(Route::Landing);
        engine.settle().await.unwrap();
        assert!(engine.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_closes_channel() {
        let mut engine = engine(FakeNewsApi::new());
        engine.shutdown();
        assert!(engine.msg_tx.send(Message::Tick).await.is_err());
        assert_eq!(engine.state.mount_id, MountId::default());
    }
}

//! Main TUI runner - entry point and event loop

use newsdesk_app::config::Settings;
use newsdesk_app::message::Message;
use newsdesk_app::{Engine, Route};
use newsdesk_client::NewsApi;
use newsdesk_core::prelude::*;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::{event, render, terminal};

/// Run the TUI against the services named in `settings`
pub async fn run(settings: Settings, route: Route) -> Result<()> {
    // Build the engine first so configuration errors print on a normal terminal
    let mut engine = Engine::from_settings(settings)?;
    engine.spawn_signal_handler();

    terminal::install_panic_hook();
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_modes() {
        warn!("Could not enable terminal modes: {}", e);
    }

    engine.start(route);
    let result = run_loop(&mut term, &mut engine, event::poll);

    engine.shutdown();
    terminal::restore();

    if let Err(e) = &result {
        error!("TUI exited with error: {}", e);
    } else {
        info!("newsdesk exiting");
    }
    result
}

/// Main event loop: drain completions, draw, then wait for one terminal event.
///
/// `poll` yields the next message or `None` for an ignored event.
pub fn run_loop<B, A, P>(
    terminal: &mut Terminal<B>,
    engine: &mut Engine<A>,
    mut poll: P,
) -> Result<()>
where
    B: Backend,
    A: NewsApi + Send + Sync + 'static,
    P: FnMut() -> Result<Option<Message>>,
{
    while !engine.should_quit() {
        // Completions from request tasks and the signal handler
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_app::InputKey;
    use newsdesk_client::test_utils::{FakeNewsApi, RecordedCall};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    fn scripted(messages: Vec<Message>) -> impl FnMut() -> Result<Option<Message>> {
        let mut queue: VecDeque<Message> = messages.into();
        move || Ok(Some(queue.pop_front().unwrap_or(Message::Quit)))
    }

    fn keys(text: &str) -> Vec<Message> {
        text.chars()
            .map(|c| Message::Key(InputKey::Char(c)))
            .collect()
    }

    #[tokio::test]
    async fn test_loop_exits_on_quit_key() {
        let mut engine = Engine::with_api(Settings::default(), FakeNewsApi::new());
        engine.start(Route::Landing);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        run_loop(&mut terminal, &mut engine, scripted(keys("q"))).unwrap();
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_loop_sends_chat_and_draws_reply() {
        let api = FakeNewsApi::new().with_chat_reply("Hi there");
        let mut engine = Engine::with_api(Settings::default(), api);
        engine.start(Route::Chat);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let mut script = keys("Hello");
        script.push(Message::Key(InputKey::Enter));
        run_loop(&mut terminal, &mut engine, scripted(script)).unwrap();

        // The loop quit before the reply landed; deliver it by hand
        let reply = engine.msg_rx.recv().await.unwrap();
        engine.process_message(reply);

        assert_eq!(
            engine.api().calls(),
            vec![RecordedCall::Chat {
                question: "Hello".to_string(),
                backend: "groq".to_string(),
            }]
        );

        terminal
            .draw(|frame| render::view(frame, &mut engine.state))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Hi there"));
    }

    #[tokio::test]
    async fn test_poll_error_stops_loop() {
        let mut engine = Engine::with_api(Settings::default(), FakeNewsApi::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let result = run_loop(&mut terminal, &mut engine, || {
            Err(Error::terminal("input closed"))
        });
        assert!(matches!(result, Err(Error::Terminal { .. })));
    }
}

//! Headless mode runner - drives one page to completion without a TUI

use tracing::{info, warn};

use newsdesk_app::config::Settings;
use newsdesk_app::message::Message;
use newsdesk_app::pages::SummaryView;
use newsdesk_app::{Engine, Route};
use newsdesk_client::NewsApi;
use newsdesk_core::format_list_or_paragraphs;
use newsdesk_core::prelude::*;

use super::HeadlessEvent;

/// One headless request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Ask { question: String },
    Subscribe { email: String },
    Summary,
}

impl HeadlessCommand {
    fn route(&self) -> Route {
        match self {
            HeadlessCommand::Ask { .. } => Route::Chat,
            HeadlessCommand::Subscribe { .. } => Route::Subscribe,
            HeadlessCommand::Summary => Route::Summarize,
        }
    }
}

/// What the page showed when it settled
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Text for plain output
    pub text: String,
    /// False when the page ended in its error state
    pub success: bool,
    /// The same result as an NDJSON event
    pub event: HeadlessEvent,
}

impl Outcome {
    fn ok(text: String, event: HeadlessEvent) -> Self {
        Self {
            text,
            success: true,
            event,
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        let text = text.into();
        let event = HeadlessEvent::error(&text, false);
        Self {
            text,
            success: false,
            event,
        }
    }

    /// Print to stdout (stderr for failures in plain mode)
    pub fn print(&self, json: bool) {
        if json {
            self.event.emit();
        } else if self.success {
            println!("{}", self.text);
        } else {
            eprintln!("{}", self.text);
        }
    }
}

/// Run one command against the services in `settings` and print the result.
///
/// Returns whether the page ended in its success state.
pub async fn run_headless(
    settings: Settings,
    command: HeadlessCommand,
    json: bool,
) -> Result<bool> {
    info!("newsdesk starting in headless mode: {:?}", command);

    let mut engine = match Engine::from_settings(settings) {
        Ok(engine) => engine,
        Err(e) => {
            if json {
                HeadlessEvent::error(&e.to_string(), true).emit();
            }
            return Err(e);
        }
    };
    engine.spawn_signal_handler();

    let result = run_command(&mut engine, &command).await;
    engine.shutdown();

    let outcome = result?;
    outcome.print(json);
    info!("Headless command finished (success: {})", outcome.success);
    Ok(outcome.success)
}

/// Mount the command's page, feed it the input and wait for the request
pub async fn run_command<A>(engine: &mut Engine<A>, command: &HeadlessCommand) -> Result<Outcome>
where
    A: NewsApi + Send + Sync + 'static,
{
    engine.start(command.route());

    match command {
        HeadlessCommand::Ask { question } => {
            engine.process_message(Message::ChatInputChanged {
                text: question.clone(),
            });
            engine.process_message(Message::ChatSubmit);
            if !engine.state.page.is_busy() {
                return Ok(Outcome::failed("Nothing to ask: the question is empty."));
            }
            settle(engine).await?;

            let chat = engine
                .state
                .chat()
                .ok_or_else(|| Error::unsettled(Route::Chat.path()))?;
            let reply = chat
                .last_reply()
                .map(|message| message.content.clone())
                .ok_or_else(|| Error::unsettled(Route::Chat.path()))?;
            if chat.last_failed {
                return Ok(Outcome::failed(reply));
            }

            let text = format_list_or_paragraphs(&reply).to_plain_text();
            let event = HeadlessEvent::chat_reply(question, &text);
            Ok(Outcome::ok(text, event))
        }

        HeadlessCommand::Subscribe { email } => {
            engine.process_message(Message::SubscribeInputChanged {
                text: email.clone(),
            });
            engine.process_message(Message::SubscribeSubmit);
            if let Some(hint) = engine
                .state
                .subscribe()
                .and_then(|s| s.validation_error.clone())
            {
                warn!("Email rejected before sending: {}", hint);
                return Ok(Outcome::failed(hint));
            }
            settle(engine).await?;

            let status = engine
                .state
                .subscribe()
                .and_then(|s| s.status.clone())
                .ok_or_else(|| Error::unsettled(Route::Subscribe.path()))?;
            let success = !status.is_error();
            let event = HeadlessEvent::subscribe_status(email.trim(), status.text(), success);
            Ok(Outcome {
                text: status.text().to_string(),
                success,
                event,
            })
        }

        HeadlessCommand::Summary => {
            settle(engine).await?;

            match engine.state.summary().map(|s| s.view()) {
                Some(SummaryView::Summary(summary)) => {
                    let event = HeadlessEvent::summary(summary);
                    Ok(Outcome::ok(summary.to_string(), event))
                }
                Some(SummaryView::Error(error)) => Ok(Outcome::failed(error)),
                Some(SummaryView::Loading) | None => {
                    Err(Error::unsettled(Route::Summarize.path()))
                }
            }
        }
    }
}

/// Wait for the in-flight request; a signal counts as a fatal interruption
async fn settle<A>(engine: &mut Engine<A>) -> Result<()>
where
    A: NewsApi + Send + Sync + 'static,
{
    engine.settle().await?;
    if engine.should_quit() {
        return Err(Error::interrupted(engine.state.route().path()));
    }
    Ok(())
}

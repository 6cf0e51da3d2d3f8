//! Action handlers: UpdateAction dispatch and request task spawning

use std::sync::Arc;
use std::time::Instant;

use newsdesk_client::NewsApi;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a request task.
///
/// The completion comes back through `msg_tx` carrying the action's mount id.
/// Nothing cancels the task; a completion for a page that has since been
/// replaced is dropped by the update function.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: NewsApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::SendChat {
            mount_id,
            question,
            backend,
        } => {
            tokio::spawn(async move {
                let started = Instant::now();
                let msg = match api.chat(&question, &backend).await {
                    Ok(reply) => Message::ChatReplyReceived { mount_id, reply },
                    Err(e) => Message::ChatReplyFailed {
                        mount_id,
                        error: e.to_string(),
                    },
                };
                debug!(
                    "Chat request for mount {} finished in {:?}",
                    mount_id,
                    started.elapsed()
                );
                deliver(&msg_tx, msg).await;
            });
        }

        UpdateAction::Subscribe { mount_id, email } => {
            tokio::spawn(async move {
                let started = Instant::now();
                let msg = match api.subscribe(&email).await {
                    Ok(message) => Message::SubscribeCompleted { mount_id, message },
                    Err(e) => Message::SubscribeFailed {
                        mount_id,
                        error: e.to_string(),
                    },
                };
                debug!(
                    "Subscribe request for mount {} finished in {:?}",
                    mount_id,
                    started.elapsed()
                );
                deliver(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchSummary { mount_id } => {
            tokio::spawn(async move {
                let started = Instant::now();
                let msg = match api.summarize().await {
                    Ok(summary) => Message::SummaryReceived { mount_id, summary },
                    Err(e) => Message::SummaryFailed {
                        mount_id,
                        error: e.to_string(),
                    },
                };
                debug!(
                    "Summary request for mount {} finished in {:?}",
                    mount_id,
                    started.elapsed()
                );
                deliver(&msg_tx, msg).await;
            });
        }
    }
}

async fn deliver(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        warn!("Message channel closed before a request completed");
    }
}

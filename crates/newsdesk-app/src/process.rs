//! Message processing: runs update() and dispatches the resulting actions

use std::sync::Arc;

use newsdesk_client::NewsApi;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function, following up messages
/// until none remain
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: NewsApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

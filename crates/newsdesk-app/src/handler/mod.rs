//! Handler module - TEA update function and key handling
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus and page

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::state::MountId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Side effects the event loop performs after update.
///
/// Each one becomes exactly one request to a collaborator service, tagged
/// with the mount that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `POST /chat`
    SendChat {
        mount_id: MountId,
        question: String,
        backend: String,
    },

    /// `POST /subscribe`
    Subscribe { mount_id: MountId, email: String },

    /// `GET /summarize`
    FetchSummary { mount_id: MountId },
}

impl UpdateAction {
    pub fn mount_id(&self) -> MountId {
        match self {
            UpdateAction::SendChat { mount_id, .. }
            | UpdateAction::Subscribe { mount_id, .. }
            | UpdateAction::FetchSummary { mount_id } => *mount_id,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

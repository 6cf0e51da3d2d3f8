//! Core domain types

use serde::{Deserialize, Serialize};

use crate::decorate::detect_right_to_left_script;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// One entry of a chat transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Display direction for this message.
    ///
    /// Only assistant content is inspected; user messages are always LTR.
    pub fn direction(&self) -> TextDirection {
        match self.role {
            Role::User => TextDirection::Ltr,
            Role::Assistant => TextDirection::detect(&self.content),
        }
    }
}

/// Horizontal reading direction of a block of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn detect(text: &str) -> Self {
        if detect_right_to_left_script(text) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let msg: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_user_messages_are_always_ltr() {
        let msg = ChatMessage::user("مرحبا");
        assert_eq!(msg.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_assistant_direction_follows_script() {
        assert_eq!(
            ChatMessage::assistant("مرحبا بك").direction(),
            TextDirection::Rtl
        );
        assert_eq!(
            ChatMessage::assistant("Hello").direction(),
            TextDirection::Ltr
        );
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Assistant");
    }
}

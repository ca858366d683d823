//! Inbound event shapes accepted by the conversation engine.

use crate::domain::settings::ChatId;
use crate::error::InboundError;
use crate::port::outbound::gateway::MessageId;

/// The user behind a command, as far as the transport knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatUser {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub username: Option<String>,
}

impl ChatUser {
    /// First name trimmed of whitespace, if non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A command message or a menu button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Command {
        chat_id: ChatId,
        user: ChatUser,
        text: String,
    },
    MenuAction {
        chat_id: ChatId,
        message_id: MessageId,
        /// Transport handle used to acknowledge the press.
        query_id: String,
        token: String,
    },
}

impl InboundEvent {
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        match self {
            Self::Command { chat_id, .. } | Self::MenuAction { chat_id, .. } => *chat_id,
        }
    }

    /// Build a command event, rejecting messages without text.
    pub fn command(
        chat_id: ChatId,
        user: ChatUser,
        text: Option<&str>,
    ) -> Result<Self, InboundError> {
        let text = text.ok_or(InboundError::Malformed("message has no text"))?;
        Ok(Self::Command {
            chat_id,
            user,
            text: text.to_string(),
        })
    }

    /// Build a menu action event, rejecting presses without a source message
    /// or payload.
    pub fn menu_action(
        chat_id: Option<ChatId>,
        message_id: Option<MessageId>,
        query_id: impl Into<String>,
        token: Option<&str>,
    ) -> Result<Self, InboundError> {
        let chat_id = chat_id.ok_or(InboundError::Malformed("button press has no chat"))?;
        let message_id =
            message_id.ok_or(InboundError::Malformed("button press has no message"))?;
        let token = token.ok_or(InboundError::Malformed("button press has no data"))?;
        Ok(Self::MenuAction {
            chat_id,
            message_id,
            query_id: query_id.into(),
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_without_text_is_malformed() {
        assert_eq!(
            InboundEvent::command(ChatId(1), ChatUser::default(), None),
            Err(InboundError::Malformed("message has no text"))
        );
    }

    #[test]
    fn menu_action_requires_message_and_data() {
        assert!(InboundEvent::menu_action(Some(ChatId(1)), None, "q", Some("settings")).is_err());
        assert!(
            InboundEvent::menu_action(Some(ChatId(1)), Some(MessageId(3)), "q", None).is_err()
        );
        assert!(
            InboundEvent::menu_action(None, Some(MessageId(3)), "q", Some("settings")).is_err()
        );

        let event =
            InboundEvent::menu_action(Some(ChatId(1)), Some(MessageId(3)), "q", Some("settings"))
                .unwrap();
        assert_eq!(event.chat_id(), ChatId(1));
    }

    #[test]
    fn display_name_skips_blank_names() {
        let user = ChatUser {
            first_name: Some("  ".to_string()),
            ..ChatUser::default()
        };
        assert_eq!(user.display_name(), None);

        let user = ChatUser {
            first_name: Some(" Ada ".to_string()),
            ..ChatUser::default()
        };
        assert_eq!(user.display_name(), Some("Ada"));
    }
}

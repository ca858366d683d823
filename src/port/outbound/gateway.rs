//! Message delivery port.
//!
//! The conversation core never retries a delivery: a single attempt per
//! render, with failures logged by the caller.

use async_trait::async_trait;

use crate::domain::screen::RenderedScreen;
use crate::domain::settings::ChatId;
use crate::error::GatewayError;

/// Identifier of a delivered message within its chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// Delivers rendered screens to a chat.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Send a new message and return its identifier.
    async fn send_message(
        &self,
        chat_id: ChatId,
        screen: &RenderedScreen,
    ) -> Result<MessageId, GatewayError>;

    /// Replace the text and keyboard of an existing message.
    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        screen: &RenderedScreen,
    ) -> Result<(), GatewayError>;

    /// Acknowledge a button press so the client stops its spinner.
    async fn acknowledge_action(&self, query_id: &str) -> Result<(), GatewayError>;

    /// Whether messages can be edited in place.
    ///
    /// When false, slow transitions skip their placeholder render.
    fn supports_editing(&self) -> bool {
        true
    }
}

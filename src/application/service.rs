//! Delivery loop around the conversation engine.
//!
//! Menu presses are acknowledged before anything else and answered by
//! editing the message that carried the button; commands are answered with
//! a new message. Each delivery is attempted once and failures are logged.

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::screen::RenderedScreen;
use crate::domain::settings::ChatId;
use crate::port::inbound::event::InboundEvent;
use crate::port::outbound::gateway::{MessageGateway, MessageId};

use super::engine::ConversationEngine;

/// Feeds inbound events through the engine and delivers the renders.
#[derive(Clone)]
pub struct ConversationService {
    engine: Arc<ConversationEngine>,
    gateway: Arc<dyn MessageGateway>,
}

impl ConversationService {
    #[must_use]
    pub fn new(engine: Arc<ConversationEngine>, gateway: Arc<dyn MessageGateway>) -> Self {
        Self { engine, gateway }
    }

    #[must_use]
    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    /// Process one inbound event end to end.
    pub async fn handle(&self, event: InboundEvent) {
        let chat_id = event.chat_id();
        let target = match &event {
            InboundEvent::MenuAction {
                query_id,
                message_id,
                ..
            } => {
                if let Err(e) = self.gateway.acknowledge_action(query_id).await {
                    warn!(chat_id = chat_id.0, error = %e, "Failed to acknowledge menu action");
                }
                Some(*message_id)
            }
            InboundEvent::Command { .. } => None,
        };

        let Some(transition) = self.engine.handle(&event) else {
            return;
        };

        let Some(follow_up) = transition.follow_up else {
            self.deliver(chat_id, target, &transition.render).await;
            return;
        };

        if !self.gateway.supports_editing() {
            let render = self.engine.complete(follow_up).await;
            self.deliver(chat_id, None, &render).await;
            return;
        }

        let placeholder = self.deliver(chat_id, target, &transition.render).await;
        let render = self.engine.complete(follow_up).await;
        self.deliver(chat_id, placeholder, &render).await;
    }

    /// Edit `target` when given, otherwise send a new message.
    ///
    /// Returns the message now showing `render`, if delivery succeeded.
    async fn deliver(
        &self,
        chat_id: ChatId,
        target: Option<MessageId>,
        render: &RenderedScreen,
    ) -> Option<MessageId> {
        let result = match target {
            Some(message_id) => self
                .gateway
                .edit_message(chat_id, message_id, render)
                .await
                .map(|()| message_id),
            None => self.gateway.send_message(chat_id, render).await,
        };

        match result {
            Ok(message_id) => Some(message_id),
            Err(e) => {
                error!(
                    chat_id = chat_id.0,
                    screen = %render.screen,
                    error = %e,
                    "Failed to deliver screen"
                );
                None
            }
        }
    }
}

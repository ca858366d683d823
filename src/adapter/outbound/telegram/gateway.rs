//! [`MessageGateway`] backed by the Telegram Bot API.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId as TelegramMessageId, ParseMode};
use teloxide::{ApiError, RequestError};

use super::keyboard::inline_markup;
use crate::domain::screen::RenderedScreen;
use crate::domain::settings::ChatId;
use crate::error::GatewayError;
use crate::port::outbound::gateway::{MessageGateway, MessageId};

/// Sends and edits HTML messages with inline keyboards.
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn request_error(err: RequestError) -> GatewayError {
    GatewayError::Request(err.to_string())
}

#[async_trait]
impl MessageGateway for TelegramGateway {
    async fn send_message(
        &self,
        chat_id: ChatId,
        screen: &RenderedScreen,
    ) -> Result<MessageId, GatewayError> {
        let mut request = self
            .bot
            .send_message(teloxide::types::ChatId(chat_id.0), &screen.text)
            .parse_mode(ParseMode::Html);
        if !screen.keyboard.is_empty() {
            request = request.reply_markup(inline_markup(&screen.keyboard));
        }
        let message = request.await.map_err(request_error)?;
        Ok(MessageId(message.id.0))
    }

    async fn edit_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
        screen: &RenderedScreen,
    ) -> Result<(), GatewayError> {
        let result = self
            .bot
            .edit_message_text(
                teloxide::types::ChatId(chat_id.0),
                TelegramMessageId(message_id.0),
                &screen.text,
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(inline_markup(&screen.keyboard))
            .await;

        match result {
            Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
            Err(err) => Err(request_error(err)),
        }
    }

    async fn acknowledge_action(&self, query_id: &str) -> Result<(), GatewayError> {
        self.bot
            .answer_callback_query(query_id.to_string())
            .await
            .map(|_| ())
            .map_err(request_error)
    }
}

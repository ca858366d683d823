//! Long-polling update listener.
//!
//! Converts Telegram messages and callback queries into [`InboundEvent`]s and
//! hands them to the [`ConversationService`]. Updates that cannot be
//! converted are dropped; callback queries are still answered so the client
//! stops its spinner.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, User};
use tracing::{debug, info, warn};

use crate::application::service::ConversationService;
use crate::domain::action::bot_commands;
use crate::domain::settings::ChatId;
use crate::port::inbound::event::{ChatUser, InboundEvent};
use crate::port::outbound::gateway::MessageId;

/// Poll Telegram for updates until shutdown.
pub async fn run_listener(bot: Bot, service: ConversationService, register_commands: bool) {
    if register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    info!("Telegram listener started");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram listener stopped");
}

async fn on_message(msg: Message, service: ConversationService) -> ResponseResult<()> {
    let user = msg.from.as_ref().map(chat_user).unwrap_or_default();
    match InboundEvent::command(ChatId(msg.chat.id.0), user, msg.text()) {
        Ok(event) => service.handle(event).await,
        Err(e) => debug!(chat_id = msg.chat.id.0, error = %e, "Dropping message"),
    }
    Ok(())
}

async fn on_callback_query(
    bot: Bot,
    query: CallbackQuery,
    service: ConversationService,
) -> ResponseResult<()> {
    let chat_id = query.message.as_ref().map(|m| ChatId(m.chat().id.0));
    let message_id = query.message.as_ref().map(|m| MessageId(m.id().0));

    match InboundEvent::menu_action(chat_id, message_id, query.id.clone(), query.data.as_deref())
    {
        Ok(event) => service.handle(event).await,
        Err(e) => {
            debug!(query_id = %query.id, error = %e, "Dropping button press");
            if let Err(e) = bot.answer_callback_query(query.id).await {
                warn!(error = %e, "Failed to acknowledge dropped button press");
            }
        }
    }
    Ok(())
}

fn chat_user(user: &User) -> ChatUser {
    ChatUser {
        id: Some(user.id.0),
        first_name: Some(user.first_name.clone()),
        username: user.username.clone(),
    }
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

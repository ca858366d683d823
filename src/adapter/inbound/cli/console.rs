//! Handler for the `console` command.
//!
//! Each stdin line becomes one inbound event for a single local chat: lines
//! starting with `#` are button presses (`#settings`), anything else is sent
//! as a chat message (`/start`). Screens are printed with their button
//! tokens so the next press can be typed.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::adapter::outbound::console::ConsoleGateway;
use crate::application::service::ConversationService;
use crate::domain::settings::ChatId;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::event::{ChatUser, InboundEvent};
use crate::port::outbound::gateway::MessageId;

const CONSOLE_CHAT: ChatId = ChatId(1);

/// Read events from stdin until EOF.
pub async fn execute(config: &Config) -> Result<()> {
    let engine = bootstrap::build_engine(config)?;
    let service = ConversationService::new(engine, Arc::new(ConsoleGateway::stdout()));

    println!("Type /start to begin, #<token> to press a button, Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut presses = 0_u64;
    while let Some(line) = lines.next_line().await? {
        let Some(event) = parse_line(&line, &mut presses) else {
            continue;
        };
        service.handle(event).await;
    }

    info!("Console session ended");
    Ok(())
}

fn parse_line(line: &str, presses: &mut u64) -> Option<InboundEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(token) = line.strip_prefix('#') {
        *presses += 1;
        return InboundEvent::menu_action(
            Some(CONSOLE_CHAT),
            Some(MessageId(0)),
            format!("console-{presses}"),
            Some(token.trim()),
        )
        .ok();
    }
    let user = ChatUser {
        id: None,
        first_name: std::env::var("USER").ok(),
        username: None,
    };
    InboundEvent::command(CONSOLE_CHAT, user, Some(line)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_prefix_is_a_button_press() {
        let mut presses = 0;
        let event = parse_line("#settings", &mut presses).unwrap();

        assert!(matches!(
            event,
            InboundEvent::MenuAction { ref token, ref query_id, .. }
                if token == "settings" && query_id == "console-1"
        ));
    }

    #[test]
    fn other_lines_are_messages() {
        let mut presses = 0;
        let event = parse_line("  /start ", &mut presses).unwrap();

        assert!(matches!(event, InboundEvent::Command { ref text, .. } if text == "/start"));
        assert_eq!(presses, 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut presses = 0;
        assert!(parse_line("   ", &mut presses).is_none());
    }
}

//! Gateway that prints screens to a writer instead of a chat.
//!
//! Used by the `console` command to drive the bot locally. Messages cannot be
//! edited on a terminal, so every delivery is printed as a new block.

use std::io::Write;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::screen::RenderedScreen;
use crate::domain::settings::ChatId;
use crate::error::GatewayError;
use crate::port::outbound::gateway::{MessageGateway, MessageId};

/// Writes each delivered screen as plain text followed by its buttons.
pub struct ConsoleGateway<W> {
    out: Mutex<W>,
    next_id: AtomicI32,
}

impl ConsoleGateway<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleGateway<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            next_id: AtomicI32::new(1),
        }
    }

    /// Consume the gateway and return the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn print(&self, screen: &RenderedScreen) -> Result<(), GatewayError> {
        let mut out = self.out.lock();
        let write = |out: &mut W| -> std::io::Result<()> {
            writeln!(out, "── {} ──", screen.screen)?;
            writeln!(out, "{}", strip_tags(&screen.text))?;
            for row in screen.keyboard.rows() {
                let buttons: Vec<String> = row
                    .iter()
                    .map(|b| format!("[{} #{}]", b.label, b.action))
                    .collect();
                writeln!(out, "{}", buttons.join(" "))?;
            }
            writeln!(out)?;
            out.flush()
        };
        write(&mut out).map_err(|e| GatewayError::Request(e.to_string()))
    }
}

#[async_trait]
impl<W: Write + Send> MessageGateway for ConsoleGateway<W> {
    async fn send_message(
        &self,
        _chat_id: ChatId,
        screen: &RenderedScreen,
    ) -> Result<MessageId, GatewayError> {
        self.print(screen)?;
        Ok(MessageId(self.next_id.fetch_add(1, Ordering::Relaxed)))
    }

    async fn edit_message(
        &self,
        _chat_id: ChatId,
        _message_id: MessageId,
        screen: &RenderedScreen,
    ) -> Result<(), GatewayError> {
        self.print(screen)
    }

    async fn acknowledge_action(&self, _query_id: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    fn supports_editing(&self) -> bool {
        false
    }
}

/// Drop HTML tags and unescape the entities used by the renderer.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::{Keyboard, ScreenId};

    #[test]
    fn strips_markup() {
        assert_eq!(strip_tags("<b>Bold</b> &amp; <i>x</i>"), "Bold & x");
    }

    #[tokio::test]
    async fn prints_text_and_buttons() {
        let gateway = ConsoleGateway::new(Vec::new());
        let screen = RenderedScreen::new(
            ScreenId::Settings,
            "⚙️ <b>Settings</b>",
            Keyboard::new().button("« Back", "back_main"),
        );

        let id = gateway.send_message(ChatId(1), &screen).await.unwrap();

        let printed = String::from_utf8(gateway.into_inner()).unwrap();
        assert_eq!(id, MessageId(1));
        assert!(printed.contains("── settings ──"));
        assert!(printed.contains("⚙️ Settings"));
        assert!(printed.contains("[« Back #back_main]"));
    }
}

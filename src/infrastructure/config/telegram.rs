//! Telegram transport configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// The `[telegram]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Publish the command list to Telegram at startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
    /// Bot API token, loaded from `TELEGRAM_BOT_TOKEN`.
    #[serde(skip)]
    pub bot_token: Option<String>,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
            bot_token: None,
        }
    }
}

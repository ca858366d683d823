//! Closed vocabularies of bot commands and menu action tokens.

use std::fmt;

use super::chain::ChainId;
use super::settings::THRESHOLD_CHOICES;

/// Inline-button actions understood by the conversation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LiveAlerts,
    TopWallets,
    RecentTransfers,
    Settings,
    SetThreshold,
    Threshold(u32),
    SetChains,
    ToggleChain(ChainId),
    PauseAlerts,
    ResumeAlerts,
    BackSettings,
    BackMain,
}

impl MenuAction {
    /// Parse an action token.
    ///
    /// Returns `None` for tokens this version does not know, including
    /// threshold values the picker never offered. Tokens from the older
    /// keyboard layout are accepted as aliases.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let action = match token {
            "live_alerts" | "alerts_on" => Self::LiveAlerts,
            "top_wallets" => Self::TopWallets,
            "recent_transfers" | "transfers" | "recent" => Self::RecentTransfers,
            "settings" => Self::Settings,
            "set_threshold" | "threshold" => Self::SetThreshold,
            "set_chains" | "chains" => Self::SetChains,
            "pause_alerts" => Self::PauseAlerts,
            "resume_alerts" => Self::ResumeAlerts,
            "back_settings" => Self::BackSettings,
            "back_main" | "menu" | "back" => Self::BackMain,
            other => return Self::parse_parameterized(other),
        };
        Some(action)
    }

    fn parse_parameterized(token: &str) -> Option<Self> {
        if let Some(raw) = token
            .strip_prefix("threshold_")
            .or_else(|| token.strip_prefix("thresh_"))
        {
            let value: u32 = raw.parse().ok()?;
            return THRESHOLD_CHOICES
                .contains(&value)
                .then_some(Self::Threshold(value));
        }
        if let Some(raw) = token.strip_prefix("chain_") {
            return raw.parse().ok().map(Self::ToggleChain);
        }
        None
    }

    /// Canonical token for this action.
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::LiveAlerts => "live_alerts".into(),
            Self::TopWallets => "top_wallets".into(),
            Self::RecentTransfers => "recent_transfers".into(),
            Self::Settings => "settings".into(),
            Self::SetThreshold => "set_threshold".into(),
            Self::Threshold(value) => format!("threshold_{value}"),
            Self::SetChains => "set_chains".into(),
            Self::ToggleChain(chain) => format!("chain_{chain}"),
            Self::PauseAlerts => "pause_alerts".into(),
            Self::ResumeAlerts => "resume_alerts".into(),
            Self::BackSettings => "back_settings".into(),
            Self::BackMain => "back_main".into(),
        }
    }
}

/// Slash commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Stop,
    Help,
    Info,
    Wallets,
    Settings,
    Transfers,
    Status,
}

/// Parse error for slash-command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a bot command.
///
/// A `@botname` suffix on the command is ignored; trailing arguments are
/// ignored too.
pub fn parse_command(text: &str) -> Result<BotCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(BotCommand::Start),
        "/stop" => Ok(BotCommand::Stop),
        "/help" => Ok(BotCommand::Help),
        "/info" => Ok(BotCommand::Info),
        "/wallets" => Ok(BotCommand::Wallets),
        "/settings" => Ok(BotCommand::Settings),
        "/transfers" => Ok(BotCommand::Transfers),
        "/status" => Ok(BotCommand::Status),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Open the main menu"),
        ("transfers", "Recent large transfers"),
        ("wallets", "Tracked whale wallets"),
        ("settings", "Alert threshold and chains"),
        ("status", "Bot status"),
        ("stop", "Pause whale alerts"),
        ("info", "About this bot"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Menu tokens
    // -------------------------------------------------------------------------

    #[test]
    fn parse_canonical_tokens() {
        assert_eq!(MenuAction::parse("settings"), Some(MenuAction::Settings));
        assert_eq!(
            MenuAction::parse("set_threshold"),
            Some(MenuAction::SetThreshold)
        );
        assert_eq!(
            MenuAction::parse("threshold_500"),
            Some(MenuAction::Threshold(500))
        );
        assert_eq!(
            MenuAction::parse("chain_ARB"),
            Some(MenuAction::ToggleChain(ChainId::Arb))
        );
        assert_eq!(MenuAction::parse("back_main"), Some(MenuAction::BackMain));
        assert_eq!(MenuAction::parse("menu"), Some(MenuAction::BackMain));
    }

    #[test]
    fn parse_legacy_aliases() {
        assert_eq!(MenuAction::parse("alerts_on"), Some(MenuAction::LiveAlerts));
        assert_eq!(
            MenuAction::parse("recent"),
            Some(MenuAction::RecentTransfers)
        );
        assert_eq!(
            MenuAction::parse("thresh_1000"),
            Some(MenuAction::Threshold(1000))
        );
        assert_eq!(MenuAction::parse("chains"), Some(MenuAction::SetChains));
        assert_eq!(MenuAction::parse("back"), Some(MenuAction::BackMain));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        for token in ["", "foo", "threshold_", "threshold_abc", "chain_DOGE", "live"] {
            assert_eq!(MenuAction::parse(token), None, "token {token:?}");
        }
    }

    #[test]
    fn parse_rejects_unoffered_threshold() {
        assert_eq!(MenuAction::parse("threshold_75"), None);
        assert_eq!(MenuAction::parse("threshold_-1"), None);
    }

    #[test]
    fn canonical_tokens_parse_back() {
        let actions = [
            MenuAction::LiveAlerts,
            MenuAction::Threshold(50),
            MenuAction::ToggleChain(ChainId::Sol),
            MenuAction::BackSettings,
        ];
        for action in actions {
            assert_eq!(MenuAction::parse(&action.token()), Some(action));
        }
    }

    // -------------------------------------------------------------------------
    // Slash commands
    // -------------------------------------------------------------------------

    #[test]
    fn parse_known_commands() {
        assert_eq!(parse_command("/start"), Ok(BotCommand::Start));
        assert_eq!(parse_command("/stop"), Ok(BotCommand::Stop));
        assert_eq!(parse_command("/info"), Ok(BotCommand::Info));
        assert_eq!(parse_command("/status"), Ok(BotCommand::Status));
    }

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/start@whale_bot"),
            Ok(BotCommand::Start)
        );
    }

    #[test]
    fn parse_command_ignores_arguments() {
        assert_eq!(parse_command("/wallets all please"), Ok(BotCommand::Wallets));
    }

    #[test]
    fn parse_plain_text_is_not_a_command() {
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("   "), Err(CommandParseError::NotACommand));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("/launch"),
            Err(CommandParseError::UnknownCommand("/launch".to_string()))
        );
    }

    #[test]
    fn bot_commands_are_parseable() {
        for (name, description) in bot_commands() {
            assert!(!description.is_empty());
            assert!(parse_command(&format!("/{name}")).is_ok(), "/{name}");
        }
    }
}

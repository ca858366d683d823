//! Render output of the conversation engine.

use std::fmt;

/// Screens of the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Main,
    Alerts,
    TopWallets,
    Transfers,
    Settings,
    ThresholdPicker,
    ChainPicker,
    /// About text reached through `/help` or `/info`.
    Info,
    /// Runtime counters reached through `/status`.
    Status,
}

impl ScreenId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Alerts => "alerts",
            Self::TopWallets => "top_wallets",
            Self::Transfers => "transfers",
            Self::Settings => "settings",
            Self::ThresholdPicker => "threshold_picker",
            Self::ChainPicker => "chain_picker",
            Self::Info => "info",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inline button: visible label plus the action token it sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: String,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Ordered rows of inline buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of buttons.
    #[must_use]
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        if !buttons.is_empty() {
            self.rows.push(buttons);
        }
        self
    }

    /// Append a single-button row.
    #[must_use]
    pub fn button(self, label: impl Into<String>, action: impl Into<String>) -> Self {
        self.row(vec![Button::new(label, action)])
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every action token on the keyboard, row-major.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(|button| button.action.as_str()))
    }
}

/// HTML-formatted text plus the keyboard shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScreen {
    pub screen: ScreenId,
    pub text: String,
    pub keyboard: Keyboard,
}

impl RenderedScreen {
    #[must_use]
    pub fn new(screen: ScreenId, text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            screen,
            text: text.into(),
            keyboard,
        }
    }

    /// Prefix the text with a one-line notice, keeping the keyboard.
    #[must_use]
    pub fn with_notice(mut self, notice: &str) -> Self {
        self.text = format!("{notice}\n\n{}", self.text);
        self
    }
}

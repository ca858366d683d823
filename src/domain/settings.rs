//! Per-chat alert preferences.

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::chain::ChainId;

/// Opaque chat identifier assigned by the chat transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Threshold values offered by the threshold picker.
pub const THRESHOLD_CHOICES: [u32; 4] = [50, 100, 500, 1000];

/// Threshold applied to chats that never changed it.
pub const DEFAULT_THRESHOLD_ETH: Decimal = dec!(100);

/// Minimum transfer size, in ETH, that qualifies for reporting to a chat.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(Decimal);

impl Threshold {
    /// Create a threshold, rejecting zero and negative values.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then(|| Self(value.normalize()))
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// True when `amount` meets this threshold.
    #[must_use]
    pub fn admits(self, amount: Decimal) -> bool {
        amount >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD_ETH)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected settings change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRejection {
    /// Deselecting this chain would leave no chain selected.
    LastChain(ChainId),
}

impl fmt::Display for SettingsRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastChain(chain) => {
                write!(f, "{chain} is the only selected chain and must stay on")
            }
        }
    }
}

/// Alert preferences for a single chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    chat_id: ChatId,
    threshold: Threshold,
    paused: bool,
    chains: BTreeSet<ChainId>,
}

impl UserSettings {
    /// Default settings: 100 ETH threshold, alerts active, Ethereum only.
    #[must_use]
    pub fn new(chat_id: ChatId) -> Self {
        Self::with_threshold(chat_id, Threshold::default())
    }

    #[must_use]
    pub fn with_threshold(chat_id: ChatId, threshold: Threshold) -> Self {
        Self {
            chat_id,
            threshold,
            paused: false,
            chains: BTreeSet::from([ChainId::Eth]),
        }
    }

    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Selected chains in menu order. Never empty.
    #[must_use]
    pub fn chains(&self) -> &BTreeSet<ChainId> {
        &self.chains
    }

    #[must_use]
    pub fn has_chain(&self, chain: ChainId) -> bool {
        self.chains.contains(&chain)
    }

    pub fn set_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Select or deselect a chain.
    ///
    /// Returns the new selection state of `chain`. Deselecting the last
    /// selected chain is rejected and leaves the selection unchanged.
    pub fn toggle_chain(&mut self, chain: ChainId) -> Result<bool, SettingsRejection> {
        if self.chains.contains(&chain) {
            if self.chains.len() == 1 {
                return Err(SettingsRejection::LastChain(chain));
            }
            self.chains.remove(&chain);
            Ok(false)
        } else {
            self.chains.insert(chain);
            Ok(true)
        }
    }

    /// Human-readable status word shown in menus.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.paused {
            "⏸️ Paused"
        } else {
            "✅ Active"
        }
    }

    /// Selected chains joined for display, e.g. `ETH, ARB`.
    #[must_use]
    pub fn chains_label(&self) -> String {
        self.chains
            .iter()
            .map(|chain| chain.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

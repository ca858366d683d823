//! Normalized transfers and aggregation reports.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::settings::Threshold;

/// Number of leading characters kept when shortening hashes and addresses.
pub const DISPLAY_PREFIX_LEN: usize = 10;

const WEI_DECIMALS: u32 = 18;

/// Direction of a transfer relative to the tracked wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The tracked wallet received funds.
    In,
    /// The tracked wallet sent funds.
    Out,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

/// A transfer touching a tracked wallet, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub wallet_label: String,
    pub tx_hash_prefix: String,
    pub value_eth: Decimal,
    /// Shortened counterparty address, or its label when it is tracked too.
    pub counterparty: String,
    pub direction: Direction,
}

/// Why an aggregation could not produce real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No ledger credential is configured.
    ConfigurationMissing,
    /// Every per-wallet query failed.
    NoData,
}

/// Outcome annotation for a [`TransferReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// Every sampled wallet answered.
    Complete,
    /// Some wallets failed; events come from the rest.
    Partial { failed: usize },
    /// Nothing usable; callers render demo content instead.
    Unavailable(UnavailableReason),
}

/// Result of one aggregation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReport {
    pub status: ReportStatus,
    /// Events in arrival order above the display floor. Not capped: the
    /// display limit applies after per-chat filtering.
    pub events: Vec<TransferEvent>,
    /// Number of wallets queried.
    pub sampled: usize,
    pub fetched_at: DateTime<Utc>,
}

impl TransferReport {
    #[must_use]
    pub fn unavailable(reason: UnavailableReason, sampled: usize) -> Self {
        Self {
            status: ReportStatus::Unavailable(reason),
            events: Vec::new(),
            sampled,
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self.status, ReportStatus::Unavailable(_))
    }

    /// Events that meet `threshold`, preserving order.
    pub fn events_at_least(&self, threshold: Threshold) -> impl Iterator<Item = &TransferEvent> {
        self.events
            .iter()
            .filter(move |event| threshold.admits(event.value_eth))
    }

    /// The first `limit` events that meet `threshold`.
    pub fn displayed(
        &self,
        threshold: Threshold,
        limit: usize,
    ) -> impl Iterator<Item = &TransferEvent> {
        self.events_at_least(threshold).take(limit)
    }
}

/// Convert a raw wei amount to ETH.
///
/// Returns `None` when the amount does not fit the decimal range.
#[must_use]
pub fn wei_to_eth(wei: u128) -> Option<Decimal> {
    let wei = i128::try_from(wei).ok()?;
    Decimal::try_from_i128_with_scale(wei, WEI_DECIMALS)
        .ok()
        .map(|eth| eth.normalize())
}

/// Shorten a hash or address to a fixed-width prefix followed by an ellipsis.
#[must_use]
pub fn display_prefix(value: &str) -> String {
    match value.char_indices().nth(DISPLAY_PREFIX_LEN) {
        Some((cut, _)) => format!("{}…", &value[..cut]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn wei_conversion_is_exact() {
        assert_eq!(wei_to_eth(1_000_000_000_000_000_000), Some(dec!(1)));
        assert_eq!(wei_to_eth(1_500_000_000_000_000_000_000), Some(dec!(1500)));
        assert_eq!(wei_to_eth(1), Some(dec!(0.000000000000000001)));
        assert_eq!(wei_to_eth(0), Some(dec!(0)));
    }

    #[test]
    fn wei_conversion_rejects_overflow() {
        assert_eq!(wei_to_eth(u128::MAX), None);
    }

    #[test]
    fn prefix_truncates_long_values() {
        assert_eq!(
            display_prefix("0xabcdef0123456789abcdef"),
            "0xabcdef01…"
        );
    }

    #[test]
    fn prefix_keeps_short_values() {
        assert_eq!(display_prefix("0xabc"), "0xabc");
        assert_eq!(display_prefix("0x12345678"), "0x12345678");
    }

    #[test]
    fn events_filtered_by_threshold_keep_order() {
        let event = |label: &str, value| TransferEvent {
            wallet_label: label.to_string(),
            tx_hash_prefix: "0x0".to_string(),
            value_eth: value,
            counterparty: "0x1".to_string(),
            direction: Direction::Out,
        };
        let report = TransferReport {
            status: ReportStatus::Complete,
            events: vec![event("a", dec!(600)), event("b", dec!(20)), event("c", dec!(500))],
            sampled: 3,
            fetched_at: Utc::now(),
        };

        let labels: Vec<_> = report
            .events_at_least(Threshold::new(dec!(500)).unwrap())
            .map(|e| e.wallet_label.as_str())
            .collect();
        assert_eq!(labels, vec!["a", "c"]);
    }

    #[test]
    fn display_limit_applies_after_threshold() {
        let event = |label: &str, value| TransferEvent {
            wallet_label: label.to_string(),
            tx_hash_prefix: "0x0".to_string(),
            value_eth: value,
            counterparty: "0x1".to_string(),
            direction: Direction::In,
        };
        let mut events: Vec<_> = (0..10).map(|_| event("dust", dec!(1))).collect();
        events.push(event("big", dec!(5000)));
        events.push(event("bigger", dec!(7000)));
        let report = TransferReport {
            status: ReportStatus::Complete,
            events,
            sampled: 3,
            fetched_at: Utc::now(),
        };

        let labels: Vec<_> = report
            .displayed(Threshold::new(dec!(100)).unwrap(), 1)
            .map(|e| e.wallet_label.as_str())
            .collect();
        assert_eq!(labels, vec!["big"]);
    }
}

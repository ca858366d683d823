//! Ledger explorer and aggregation configuration.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::application::aggregator::AggregatorConfig;

/// The `[ledger]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Explorer API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Chain queried through the multichain endpoint (1 = Ethereum mainnet).
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// Per-wallet query timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Number of catalog wallets sampled per report.
    #[serde(default = "default_sample_wallets")]
    pub sample_wallets: usize,
    /// Transactions requested per wallet.
    #[serde(default = "default_transactions_per_wallet")]
    pub transactions_per_wallet: usize,
    /// Transfers below this many ETH are never shown.
    #[serde(default = "default_display_floor_eth")]
    pub display_floor_eth: Decimal,
    /// Maximum transfers per report.
    #[serde(default = "default_max_display")]
    pub max_display: usize,
    /// Seconds a report is reused; 0 disables caching.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Explorer API key, loaded from `ETHERSCAN_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.etherscan.io/v2/api".to_string()
}

const fn default_chain_id() -> u64 {
    1
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_sample_wallets() -> usize {
    5
}

const fn default_transactions_per_wallet() -> usize {
    5
}

fn default_display_floor_eth() -> Decimal {
    dec!(0.1)
}

const fn default_max_display() -> usize {
    8
}

const fn default_cache_ttl_secs() -> u64 {
    30
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            chain_id: default_chain_id(),
            timeout_ms: default_timeout_ms(),
            sample_wallets: default_sample_wallets(),
            transactions_per_wallet: default_transactions_per_wallet(),
            display_floor_eth: default_display_floor_eth(),
            max_display: default_max_display(),
            cache_ttl_secs: default_cache_ttl_secs(),
            api_key: None,
        }
    }
}

impl LedgerConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Aggregation tunables derived from this section.
    #[must_use]
    pub fn aggregator(&self) -> AggregatorConfig {
        AggregatorConfig {
            sample_wallets: self.sample_wallets,
            transactions_per_wallet: self.transactions_per_wallet,
            request_timeout: self.request_timeout(),
            display_floor_eth: self.display_floor_eth,
            max_display: self.max_display,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_aggregator_defaults() {
        assert_eq!(LedgerConfig::default().aggregator(), AggregatorConfig::default());
    }
}

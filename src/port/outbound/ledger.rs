//! Ledger explorer port.
//!
//! Implementations list the most recent transactions of an account. They are
//! treated as unreliable: callers bound every query with a timeout and
//! tolerate individual failures.

use async_trait::async_trait;

use crate::domain::wallet::WalletAddress;
use crate::error::LedgerError;

/// A raw transaction as reported by the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerTransaction {
    pub hash: String,
    /// Sender address as returned by the explorer.
    pub from: String,
    /// Recipient address; empty for contract creations.
    pub to: String,
    /// Transferred amount in wei.
    pub value_wei: u128,
}

/// Read access to an account's transaction history.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Most recent transactions of `address`, newest first, at most `limit`.
    async fn list_recent_transactions(
        &self,
        address: &WalletAddress,
        limit: usize,
    ) -> Result<Vec<LedgerTransaction>, LedgerError>;

    /// Name used in logs.
    fn provider_name(&self) -> &'static str;
}

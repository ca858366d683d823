//! Scripted [`LedgerApi`] for aggregation tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::wallet::WalletAddress;
use crate::error::LedgerError;
use crate::port::outbound::ledger::{LedgerApi, LedgerTransaction};

#[derive(Debug, Clone)]
enum Script {
    Answer(Vec<LedgerTransaction>),
    Fail(u16),
}

/// Ledger with a fixed answer per address.
///
/// Unscripted addresses answer with an empty history. Every answer can be
/// delayed, which together with `tokio::time::pause` exercises timeouts.
#[derive(Debug, Default)]
pub struct ScriptedLedger {
    scripts: HashMap<WalletAddress, Script>,
    delays: HashMap<WalletAddress, Duration>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `address` with `transactions`.
    pub fn with_transactions(
        mut self,
        address: WalletAddress,
        transactions: Vec<LedgerTransaction>,
    ) -> Self {
        self.scripts.insert(address, Script::Answer(transactions));
        self
    }

    /// Fail queries for `address` with an HTTP status.
    pub fn with_failure(mut self, address: WalletAddress, status: u16) -> Self {
        self.scripts.insert(address, Script::Fail(status));
        self
    }

    /// Delay answers for `address`.
    pub fn with_delay(mut self, address: WalletAddress, delay: Duration) -> Self {
        self.delays.insert(address, delay);
        self
    }

    /// Shared counter of queries received.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LedgerApi for ScriptedLedger {
    async fn list_recent_transactions(
        &self,
        address: &WalletAddress,
        limit: usize,
    ) -> Result<Vec<LedgerTransaction>, LedgerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(address) {
            tokio::time::sleep(*delay).await;
        }
        match self.scripts.get(address) {
            Some(Script::Answer(transactions)) => {
                Ok(transactions.iter().take(limit).cloned().collect())
            }
            Some(Script::Fail(status)) => Err(LedgerError::Status(*status)),
            None => Ok(Vec::new()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

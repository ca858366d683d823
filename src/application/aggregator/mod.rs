//! Transfer aggregation across the top tracked wallets.
//!
//! One aggregation round queries the first `N` catalog wallets concurrently,
//! each bounded by its own timeout. Wallets whose query fails or times out are
//! dropped and counted; the rest are normalized into [`TransferEvent`]s,
//! filtered by a global display floor and deduplicated by transaction hash.
//!
//! Per-chat thresholds and the display limit are not applied here: the same
//! report serves every chat, and renderers filter by threshold first and cap
//! to [`AggregatorConfig::max_display`] after.

mod cache;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::domain::transfer::{
    display_prefix, wei_to_eth, Direction, ReportStatus, TransferEvent, TransferReport,
    UnavailableReason,
};
use crate::domain::wallet::{WalletAddress, WalletEntry};
use crate::error::LedgerError;
use crate::port::outbound::ledger::{LedgerApi, LedgerTransaction};

use super::catalog::WalletCatalog;
use cache::ReportCache;

/// Tunables for one aggregation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Number of catalog wallets sampled per round (`N`).
    pub sample_wallets: usize,
    /// Transactions requested per wallet (`K`).
    pub transactions_per_wallet: usize,
    /// Upper bound for each per-wallet query.
    pub request_timeout: Duration,
    /// Transfers below this many ETH are never reported.
    pub display_floor_eth: Decimal,
    /// Maximum events shown from one report.
    pub max_display: usize,
    /// How long a report is reused before querying again.
    pub cache_ttl: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            sample_wallets: 5,
            transactions_per_wallet: 5,
            request_timeout: Duration::from_secs(10),
            display_floor_eth: dec!(0.1),
            max_display: 8,
            cache_ttl: Duration::from_secs(30),
        }
    }
}

/// Fans out ledger queries and folds the answers into a [`TransferReport`].
pub struct TransferAggregator {
    /// `None` when no ledger credential is configured.
    ledger: Option<Arc<dyn LedgerApi>>,
    catalog: Arc<WalletCatalog>,
    config: AggregatorConfig,
    cache: ReportCache,
}

impl TransferAggregator {
    #[must_use]
    pub fn new(
        ledger: Option<Arc<dyn LedgerApi>>,
        catalog: Arc<WalletCatalog>,
        config: AggregatorConfig,
    ) -> Self {
        let cache = ReportCache::new(config.cache_ttl);
        Self {
            ledger,
            catalog,
            config,
            cache,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// True when a ledger client is configured.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.ledger.is_some()
    }

    /// Recent transfers of the sampled wallets.
    ///
    /// Never fails: a missing credential or a round where every wallet
    /// failed yields an [`ReportStatus::Unavailable`] report.
    pub async fn recent_transfers(&self) -> TransferReport {
        let sampled = self.catalog.top(self.config.sample_wallets).len();
        let Some(ledger) = self.ledger.as_ref() else {
            debug!("No ledger credential configured, serving demo report");
            return TransferReport::unavailable(UnavailableReason::ConfigurationMissing, sampled);
        };

        if let Some(report) = self.cache.get() {
            debug!(events = report.events.len(), "Serving cached transfer report");
            return report;
        }

        let report = self.aggregate(ledger.as_ref()).await;
        if !report.is_unavailable() {
            self.cache.store(report.clone());
        }
        report
    }

    async fn aggregate(&self, ledger: &dyn LedgerApi) -> TransferReport {
        let wallets = self.catalog.top(self.config.sample_wallets);
        let queries = wallets.iter().map(|wallet| async move {
            let result = self.query(ledger, wallet).await;
            (wallet, result)
        });
        let results = join_all(queries).await;

        let mut seen = HashSet::new();
        let mut events = Vec::new();
        let mut failed = 0;

        for (wallet, result) in results {
            match result {
                Ok(transactions) => {
                    for tx in &transactions {
                        let Some(event) = self.normalize(wallet, tx) else {
                            continue;
                        };
                        if seen.insert(tx.hash.to_ascii_lowercase()) {
                            events.push(event);
                        }
                    }
                }
                Err(err) => {
                    failed += 1;
                    warn!(
                        wallet = %wallet.label,
                        provider = ledger.provider_name(),
                        error = %err,
                        "Dropping wallet from transfer report"
                    );
                }
            }
        }

        let sampled = wallets.len();
        if failed == sampled {
            warn!(sampled, "Every wallet query failed");
            return TransferReport::unavailable(UnavailableReason::NoData, sampled);
        }

        let status = if failed == 0 {
            ReportStatus::Complete
        } else {
            ReportStatus::Partial { failed }
        };
        info!(
            sampled,
            failed,
            events = events.len(),
            "Aggregated whale transfers"
        );

        TransferReport {
            status,
            events,
            sampled,
            fetched_at: chrono::Utc::now(),
        }
    }

    async fn query(
        &self,
        ledger: &dyn LedgerApi,
        wallet: &WalletEntry,
    ) -> Result<Vec<LedgerTransaction>, LedgerError> {
        let request =
            ledger.list_recent_transactions(&wallet.address, self.config.transactions_per_wallet);
        match tokio::time::timeout(self.config.request_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(LedgerError::Timeout(
                u64::try_from(self.config.request_timeout.as_millis()).unwrap_or(u64::MAX),
            )),
        }
    }

    fn normalize(&self, wallet: &WalletEntry, tx: &LedgerTransaction) -> Option<TransferEvent> {
        let value_eth = wei_to_eth(tx.value_wei)?;
        if value_eth < self.config.display_floor_eth {
            return None;
        }

        let sender = tx.from.parse::<WalletAddress>().ok();
        let direction = if sender == Some(wallet.address) {
            Direction::Out
        } else {
            Direction::In
        };
        let counterparty = match direction {
            Direction::Out => self.describe_counterparty(&tx.to),
            Direction::In => self.describe_counterparty(&tx.from),
        };

        Some(TransferEvent {
            wallet_label: wallet.label.clone(),
            tx_hash_prefix: display_prefix(&tx.hash),
            value_eth,
            counterparty,
            direction,
        })
    }

    fn describe_counterparty(&self, raw: &str) -> String {
        if raw.is_empty() {
            return "contract creation".to_string();
        }
        raw.parse::<WalletAddress>()
            .ok()
            .and_then(|address| self.catalog.label_of(&address))
            .map_or_else(|| display_prefix(raw), str::to_string)
    }
}

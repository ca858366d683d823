#![allow(dead_code)]

use std::sync::Arc;

use whaletrack::application::{
    AggregatorConfig, ConversationEngine, ConversationService, SettingsStore, TransferAggregator,
    WalletCatalog,
};
use whaletrack::domain::wallet::WalletAddress;
use whaletrack::port::LedgerApi;
use whaletrack::testkit::gateway::RecordingGateway;

/// Address of the `index`-th built-in wallet.
pub fn wallet(index: usize) -> WalletAddress {
    WalletCatalog::builtin().list()[index].address
}

pub fn aggregator(
    ledger: Option<Arc<dyn LedgerApi>>,
    config: AggregatorConfig,
) -> Arc<TransferAggregator> {
    Arc::new(TransferAggregator::new(
        ledger,
        Arc::new(WalletCatalog::builtin()),
        config,
    ))
}

/// Service over a fresh engine and recording gateway.
pub fn service(
    ledger: Option<Arc<dyn LedgerApi>>,
    gateway: RecordingGateway,
) -> ConversationService {
    let catalog = Arc::new(WalletCatalog::builtin());
    let aggregator = Arc::new(TransferAggregator::new(
        ledger,
        Arc::clone(&catalog),
        AggregatorConfig::default(),
    ));
    let engine = Arc::new(ConversationEngine::new(
        Arc::new(SettingsStore::new()),
        catalog,
        aggregator,
    ));
    ConversationService::new(engine, Arc::new(gateway))
}

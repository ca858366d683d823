//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::etherscan::EtherscanClient;
use crate::application::aggregator::TransferAggregator;
use crate::application::catalog::WalletCatalog;
use crate::application::engine::ConversationEngine;
use crate::application::settings_store::SettingsStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::ledger::LedgerApi;

/// Build the ledger client, or `None` when no API key is configured.
///
/// # Errors
///
/// Returns an error when the configured endpoint is not a valid URL.
#[allow(clippy::result_large_err)]
pub fn build_ledger(config: &Config) -> Result<Option<Arc<dyn LedgerApi>>> {
    let Some(api_key) = config.ledger.api_key.as_deref() else {
        warn!("ETHERSCAN_API_KEY not set, transfer reports will use demo data");
        return Ok(None);
    };

    let client = EtherscanClient::new(
        &config.ledger.api_url,
        config.ledger.chain_id,
        api_key,
        config.ledger.request_timeout(),
    )?;
    info!(chain_id = config.ledger.chain_id, "Etherscan client ready");
    Ok(Some(Arc::new(client)))
}

/// Build the transfer aggregator over `catalog`.
#[allow(clippy::result_large_err)]
pub fn build_aggregator(
    config: &Config,
    catalog: Arc<WalletCatalog>,
) -> Result<Arc<TransferAggregator>> {
    let ledger = build_ledger(config)?;
    Ok(Arc::new(TransferAggregator::new(
        ledger,
        catalog,
        config.ledger.aggregator(),
    )))
}

/// Build the conversation engine with fresh in-memory settings.
#[allow(clippy::result_large_err)]
pub fn build_engine(config: &Config) -> Result<Arc<ConversationEngine>> {
    let catalog = Arc::new(config.catalog()?);
    let aggregator = build_aggregator(config, Arc::clone(&catalog))?;
    let settings = Arc::new(SettingsStore::with_default_threshold(
        config.default_threshold(),
    ));

    info!(
        wallets = catalog.count(),
        live = aggregator.is_live(),
        default_threshold = %config.default_threshold(),
        "Conversation engine ready"
    );
    Ok(Arc::new(ConversationEngine::new(settings, catalog, aggregator)))
}

/// Run the Telegram bot until shutdown.
///
/// # Errors
///
/// Returns an error when `TELEGRAM_BOT_TOKEN` is missing or wiring fails.
#[cfg(feature = "telegram")]
#[allow(clippy::result_large_err)]
pub async fn run_bot(config: &Config) -> Result<()> {
    use crate::adapter::outbound::telegram::{run_listener, TelegramGateway};
    use crate::application::service::ConversationService;
    use crate::error::ConfigError;

    let Some(token) = config.telegram.bot_token.as_deref() else {
        return Err(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN",
        }
        .into());
    };

    let engine = build_engine(config)?;
    let bot = teloxide::Bot::new(token);
    let service = ConversationService::new(engine, Arc::new(TelegramGateway::new(bot.clone())));

    run_listener(bot, service, config.telegram.register_commands).await;
    Ok(())
}

/// Run the Telegram bot until shutdown.
#[cfg(not(feature = "telegram"))]
#[allow(clippy::result_large_err)]
pub async fn run_bot(_config: &Config) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "telegram",
        reason: "this build has no Telegram support; enable the `telegram` feature".to_string(),
    }
    .into())
}

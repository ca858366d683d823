//! Whaletrack - whale transfer tracking over a Telegram menu bot.
//!
//! The bot follows a catalog of large exchange wallets, summarizes their
//! recent transfers from a block explorer, and lets each chat tune which
//! transfers it cares about through an inline-keyboard menu.
//!
//! # Architecture
//!
//! The crate uses a hexagonal layout:
//!
//! - **`domain`** - Pure types: settings, thresholds, wallets, transfers,
//!   screens and the action vocabulary
//! - **`port`** - Traits at the seams: `LedgerApi`, `MessageGateway`
//! - **`application`** - `SettingsStore`, `WalletCatalog`,
//!   `TransferAggregator` and the `ConversationEngine` menu state machine
//! - **`adapter`** - Etherscan client, Telegram transport, console, CLI
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Features
//!
//! - `telegram` (default) - Telegram transport via teloxide
//! - `testkit` - Scripted ledger and recording gateway for integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use whaletrack::application::{
//!     AggregatorConfig, ConversationEngine, SettingsStore, TransferAggregator, WalletCatalog,
//! };
//!
//! let catalog = Arc::new(WalletCatalog::builtin());
//! let aggregator = Arc::new(TransferAggregator::new(
//!     None,
//!     Arc::clone(&catalog),
//!     AggregatorConfig::default(),
//! ));
//! let engine = ConversationEngine::new(Arc::new(SettingsStore::new()), catalog, aggregator);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

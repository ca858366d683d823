//! Application services (use cases).
//!
//! These services hold the per-chat state, query the ledger through its
//! port, and drive the menu conversation.

pub mod aggregator;
pub mod catalog;
pub mod engine;
pub mod service;
pub mod settings_store;

pub use aggregator::{AggregatorConfig, TransferAggregator};
pub use catalog::WalletCatalog;
pub use engine::{ConversationEngine, FollowUp, Transition};
pub use service::ConversationService;
pub use settings_store::SettingsStore;

//! Telegram chat transport.
//!
//! Requires the `telegram` feature to be enabled.

pub mod gateway;
pub mod keyboard;
pub mod listener;

pub use gateway::TelegramGateway;
pub use listener::run_listener;

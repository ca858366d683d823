//! Outbound adapters (driven side).

pub mod console;
pub mod etherscan;

#[cfg(feature = "telegram")]
pub mod telegram;

//! Etherscan explorer integration.

pub mod client;
pub mod dto;

pub use client::EtherscanClient;

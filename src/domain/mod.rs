//! Transport-agnostic types: chat settings, tracked wallets, transfers, and
//! the screens the conversation engine renders.

pub mod action;
pub mod chain;
pub mod screen;
pub mod settings;
pub mod transfer;
pub mod wallet;

//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod gateway;
pub mod ledger;

//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`ledger`] — `ScriptedLedger`, a [`LedgerApi`](crate::port::LedgerApi)
//!   with per-address answers, failures and delays.
//! - [`gateway`] — `RecordingGateway`, a
//!   [`MessageGateway`](crate::port::MessageGateway) that keeps every delivery.
//! - [`domain`] — Builders for ledger transactions and engine events.

pub mod domain;
pub mod gateway;
pub mod ledger;

//! Tracked wallet list overrides.

use std::collections::HashSet;

use serde::Deserialize;

use crate::application::catalog::WalletCatalog;
use crate::domain::wallet::{WalletAddress, WalletEntry};
use crate::error::ConfigError;

/// One `[[wallets]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfigEntry {
    pub address: String,
    pub label: String,
}

/// Build the catalog from configured entries.
///
/// An empty list keeps the built-in catalog.
pub fn build_catalog(entries: &[WalletConfigEntry]) -> Result<WalletCatalog, ConfigError> {
    if entries.is_empty() {
        return Ok(WalletCatalog::builtin());
    }

    let mut seen = HashSet::new();
    let mut wallets = Vec::with_capacity(entries.len());
    for entry in entries {
        let address = entry
            .address
            .parse::<WalletAddress>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "wallets.address",
                reason: e.to_string(),
            })?;
        let label = entry.label.trim();
        if label.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "wallets.label",
                reason: format!("label for {address} must not be empty"),
            });
        }
        if !seen.insert(address) {
            return Err(ConfigError::InvalidValue {
                field: "wallets.address",
                reason: format!("{address} is listed more than once"),
            });
        }
        wallets.push(WalletEntry::new(address, label));
    }
    Ok(WalletCatalog::new(wallets))
}

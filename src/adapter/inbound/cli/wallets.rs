//! Handler for the `wallets` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::application::catalog::WalletCatalog;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct WalletRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Address")]
    address: String,
}

/// Print the tracked wallet catalog.
#[allow(clippy::result_large_err)]
pub fn execute(config: &Config, json_output: bool) -> Result<()> {
    let catalog = config.catalog()?;
    if json_output {
        println!("{}", wallets_json(&catalog));
    } else {
        println!("{}", wallets_table(&catalog));
    }
    Ok(())
}

fn wallets_table(catalog: &WalletCatalog) -> String {
    let rows: Vec<WalletRow> = catalog
        .list()
        .iter()
        .enumerate()
        .map(|(i, wallet)| WalletRow {
            rank: i + 1,
            label: wallet.label.clone(),
            address: wallet.address.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}

fn wallets_json(catalog: &WalletCatalog) -> serde_json::Value {
    let wallets: Vec<_> = catalog
        .list()
        .iter()
        .map(|wallet| json!({ "label": wallet.label, "address": wallet.address.to_string() }))
        .collect();
    json!({ "command": "wallets", "count": catalog.count(), "wallets": wallets })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_wallet() {
        let table = wallets_table(&WalletCatalog::builtin());
        assert!(table.contains("Binance Hot"));
        assert!(table.contains("0x28C6c06298d514Db089934071355E5743bf21d60"));
        assert!(table.contains("FTX/Alameda"));
    }

    #[test]
    fn json_carries_count() {
        let value = wallets_json(&WalletCatalog::builtin());
        assert_eq!(value["count"], 10);
        assert_eq!(value["wallets"][0]["label"], "Binance Hot");
    }
}

//! The fixed list of tracked whale wallets.

use crate::domain::wallet::{WalletAddress, WalletEntry};

/// Built-in wallets, in display order.
const BUILTIN_WALLETS: [(&str, &str); 10] = [
    ("0x28C6c06298d514Db089934071355E5743bf21d60", "Binance Hot"),
    ("0x21a31Ee1afC51d94C2eFcCAa2092aD1028285549", "Binance Cold"),
    ("0xDFd5293D8e347dFe59E90eFd55b2956a1343963d", "Bitfinex"),
    ("0x267be1C1D684F78cb4F6a176C4911b741E4Ffdc0", "Kraken"),
    ("0x6cC5F688a315f3dC28A7781717a9A798a59fDA7b", "OKX"),
    ("0x47ac0Fb4F2D84898e4D9E7b4DaB3C24507a6D503", "Binance 3"),
    ("0xF977814e90dA44bFA03b6295A0616a897441aceC", "Binance 8"),
    ("0x8103683202aa8DA10536036EDef04CDd865C225E", "Kraken 2"),
    ("0x2FAF487A4414Fe77e2327F0bf4AE2a264a776AD2", "FTX/Alameda"),
    ("0xBE0eB53F46cd790Cd13851d5EFf43D12404d33E8", "Binance 7"),
];

/// Read-only, insertion-ordered list of tracked wallets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletCatalog {
    entries: Vec<WalletEntry>,
}

impl WalletCatalog {
    #[must_use]
    pub fn new(entries: Vec<WalletEntry>) -> Self {
        Self { entries }
    }

    /// The default catalog of exchange hot and cold wallets.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_WALLETS
            .iter()
            .filter_map(|(address, label)| {
                address
                    .parse::<WalletAddress>()
                    .ok()
                    .map(|address| WalletEntry::new(address, *label))
            })
            .collect();
        Self::new(entries)
    }

    /// All wallets in insertion order.
    #[must_use]
    pub fn list(&self) -> &[WalletEntry] {
        &self.entries
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The first `n` wallets (fewer if the catalog is smaller).
    #[must_use]
    pub fn top(&self, n: usize) -> &[WalletEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Label of a tracked address.
    #[must_use]
    pub fn label_of(&self, address: &WalletAddress) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.address == *address)
            .map(|entry| entry.label.as_str())
    }
}

impl Default for WalletCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_every_entry() {
        let catalog = WalletCatalog::builtin();
        assert_eq!(catalog.count(), BUILTIN_WALLETS.len());
        assert_eq!(catalog.list()[0].label, "Binance Hot");
        assert_eq!(catalog.list()[9].label, "Binance 7");
    }

    #[test]
    fn top_is_bounded_by_catalog_size() {
        let catalog = WalletCatalog::builtin();
        assert_eq!(catalog.top(5).len(), 5);
        assert_eq!(catalog.top(50).len(), catalog.count());
        assert_eq!(catalog.top(5)[4].label, "OKX");
    }

    #[test]
    fn label_lookup_ignores_address_casing() {
        let catalog = WalletCatalog::builtin();
        let lower: WalletAddress = "0x6cc5f688a315f3dc28a7781717a9a798a59fda7b"
            .parse()
            .unwrap();
        assert_eq!(catalog.label_of(&lower), Some("OKX"));
    }

    #[test]
    fn unknown_address_has_no_label() {
        let catalog = WalletCatalog::builtin();
        let stranger: WalletAddress = "0x0000000000000000000000000000000000000001"
            .parse()
            .unwrap();
        assert_eq!(catalog.label_of(&stranger), None);
    }
}

//! Tracked wallet entries.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;

/// A 20-byte account address.
///
/// Parsing accepts any hex casing, so checksummed and lowercase spellings of
/// the same account compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress(Address);

impl WalletAddress {
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    #[must_use]
    pub const fn as_address(&self) -> &Address {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex, the form explorer APIs expect.
    #[must_use]
    pub fn to_lower_hex(&self) -> String {
        format!("{:#x}", self.0)
    }

    /// Compact `0x1234...abcd` form for menus.
    #[must_use]
    pub fn short(&self) -> String {
        let hex = self.0.to_checksum(None);
        format!("{}...{}", &hex[..6], &hex[hex.len() - 4..])
    }
}

impl FromStr for WalletAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
            return Err(InvalidAddress(s.to_string()));
        }
        Address::from_str(trimmed)
            .map(Self)
            .map_err(|_| InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_checksum(None))
    }
}

/// Returned when a string is not a `0x`-prefixed 20-byte hex address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAddress(pub String);

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid wallet address `{}`", self.0)
    }
}

impl std::error::Error for InvalidAddress {}

/// A tracked wallet and the label it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub address: WalletAddress,
    pub label: String,
}

impl WalletEntry {
    #[must_use]
    pub fn new(address: WalletAddress, label: impl Into<String>) -> Self {
        Self {
            address,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BINANCE_HOT: &str = "0x28C6c06298d514Db089934071355E5743bf21d60";

    #[test]
    fn casing_does_not_affect_identity() {
        let checksummed: WalletAddress = BINANCE_HOT.parse().unwrap();
        let lower: WalletAddress = BINANCE_HOT.to_lowercase().parse().unwrap();
        assert_eq!(checksummed, lower);
    }

    #[test]
    fn lower_hex_is_prefixed_and_lowercase() {
        let address: WalletAddress = BINANCE_HOT.parse().unwrap();
        assert_eq!(
            address.to_lower_hex(),
            "0x28c6c06298d514db089934071355e5743bf21d60"
        );
    }

    #[test]
    fn short_form_keeps_head_and_tail() {
        let address: WalletAddress = BINANCE_HOT.parse().unwrap();
        assert_eq!(address.short(), "0x28C6...1d60");
    }

    #[test]
    fn rejects_garbage() {
        assert!("hello".parse::<WalletAddress>().is_err());
        assert!("0x1234".parse::<WalletAddress>().is_err());
        assert!("28C6c06298d514Db089934071355E5743bf21d60"
            .parse::<WalletAddress>()
            .is_err());
    }
}

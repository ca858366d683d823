//! Chains a user can select for alerts.

use std::fmt;
use std::str::FromStr;

/// Supported chain identifiers, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainId {
    Eth,
    Bsc,
    Arb,
    Matic,
    Sol,
}

impl ChainId {
    /// Every chain offered in the chain picker.
    pub const ALL: [ChainId; 5] = [
        ChainId::Eth,
        ChainId::Bsc,
        ChainId::Arb,
        ChainId::Matic,
        ChainId::Sol,
    ];

    /// Ticker shown in menus and used in action tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eth => "ETH",
            Self::Bsc => "BSC",
            Self::Arb => "ARB",
            Self::Matic => "MATIC",
            Self::Sol => "SOL",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChain(s.to_string()))
    }
}

/// Returned when a chain ticker is not one of [`ChainId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChain(pub String);

impl fmt::Display for UnknownChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chain `{}`", self.0)
    }
}

impl std::error::Error for UnknownChain {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("eth".parse::<ChainId>().unwrap(), ChainId::Eth);
        assert_eq!("MATIC".parse::<ChainId>().unwrap(), ChainId::Matic);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "DOGE".parse::<ChainId>().unwrap_err(),
            UnknownChain("DOGE".to_string())
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for chain in ChainId::ALL {
            assert_eq!(chain.to_string().parse::<ChainId>().unwrap(), chain);
        }
    }
}

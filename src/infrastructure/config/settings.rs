//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; credentials never live
//! in the file and are read from `ETHERSCAN_API_KEY` and `TELEGRAM_BOT_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use whaletrack::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::ledger::LedgerConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramConfig;
use super::wallets::{build_catalog, WalletConfigEntry};
use crate::application::catalog::WalletCatalog;
use crate::domain::settings::{Threshold, DEFAULT_THRESHOLD_ETH};
use crate::error::{ConfigError, Result};

const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// The `[defaults]` section: settings given to chats on first contact.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_threshold_eth")]
    pub threshold_eth: Decimal,
}

fn default_threshold_eth() -> Decimal {
    DEFAULT_THRESHOLD_ETH
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threshold_eth: default_threshold_eth(),
        }
    }
}

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Explorer endpoint and aggregation limits.
    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Replaces the built-in wallet list when non-empty.
    #[serde(default)]
    pub wallets: Vec<WalletConfigEntry>,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// Credentials are not read here; see [`Config::with_env_secrets`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and read credentials from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Ok(Self::parse_toml(&content)?.with_env_secrets())
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default().with_env_secrets())
        }
    }

    /// Fill credentials from `ETHERSCAN_API_KEY` and `TELEGRAM_BOT_TOKEN`.
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn with_env_secrets(mut self) -> Self {
        self.ledger.api_key = read_secret(ETHERSCAN_API_KEY);
        self.telegram.bot_token = read_secret(TELEGRAM_BOT_TOKEN);
        self
    }

    /// Initialize the tracing subscriber with this configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Threshold assigned to new chats.
    #[must_use]
    pub fn default_threshold(&self) -> Threshold {
        Threshold::new(self.defaults.threshold_eth).unwrap_or_default()
    }

    /// Wallet catalog from `[[wallets]]`, or the built-in list.
    ///
    /// # Errors
    ///
    /// Returns an error when an entry is invalid.
    #[allow(clippy::result_large_err)]
    pub fn catalog(&self) -> Result<WalletCatalog> {
        Ok(build_catalog(&self.wallets)?)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let ledger = &self.ledger;
        if ledger.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if ledger.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if ledger.sample_wallets == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sample_wallets",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if ledger.transactions_per_wallet == 0 {
            return Err(ConfigError::InvalidValue {
                field: "transactions_per_wallet",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if ledger.display_floor_eth <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "display_floor_eth",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if ledger.max_display == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_display",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if Threshold::new(self.defaults.threshold_eth).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "threshold_eth",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        build_catalog(&self.wallets)?;
        Ok(())
    }
}

fn read_secret(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::logging::LogFormat;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.ledger.api_url, "https://api.etherscan.io/v2/api");
        assert_eq!(config.ledger.sample_wallets, 5);
        assert_eq!(config.default_threshold().value(), dec!(100));
        assert!(config.telegram.register_commands);
        assert_eq!(config.catalog().unwrap().count(), 10);
        assert!(config.ledger.api_key.is_none());
    }

    #[test]
    fn parses_full_file() {
        let config = Config::parse_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [ledger]
            chain_id = 1
            timeout_ms = 2500
            sample_wallets = 3
            transactions_per_wallet = 10
            display_floor_eth = "0.5"
            max_display = 4
            cache_ttl_secs = 0

            [defaults]
            threshold_eth = 500

            [telegram]
            register_commands = false

            [[wallets]]
            address = "0x28C6c06298d514Db089934071355E5743bf21d60"
            label = "Binance Hot"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.ledger.timeout_ms, 2500);
        assert_eq!(config.ledger.display_floor_eth, dec!(0.5));
        assert_eq!(config.default_threshold().value(), dec!(500));
        assert!(!config.telegram.register_commands);
        assert_eq!(config.catalog().unwrap().count(), 1);
        assert!(config.ledger.aggregator().cache_ttl.is_zero());
    }

    #[test]
    fn rejects_zero_sample_size() {
        let err = Config::parse_toml("[ledger]\nsample_wallets = 0").unwrap_err();
        assert!(err.to_string().contains("sample_wallets"));
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let err = Config::parse_toml("[defaults]\nthreshold_eth = 0").unwrap_err();
        assert!(err.to_string().contains("threshold_eth"));
    }

    #[test]
    fn rejects_non_positive_floor() {
        assert!(Config::parse_toml("[ledger]\ndisplay_floor_eth = -1").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse_toml("[ledger").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::Parse(_))
        ));
    }
}

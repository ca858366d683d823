//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Whale transfer tracker bot
#[derive(Parser, Debug)]
#[command(name = "whaletrack")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (long polling)
    Run,

    /// Talk to the bot from the terminal
    Console,

    /// Fetch recent whale transfers once and print them
    Transfers,

    /// List the tracked wallets
    Wallets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["whaletrack", "wallets", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Commands::Wallets));
    }

    #[test]
    fn defaults_to_local_config() {
        let cli = Cli::parse_from(["whaletrack", "run"]);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.json);
    }
}

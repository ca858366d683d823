//! Handler for the `run` command.

use tracing::info;

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Start the Telegram bot and block until it stops.
pub async fn execute(config: &Config) -> Result<()> {
    info!("Starting Telegram bot");
    bootstrap::run_bot(config).await
}

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use whaletrack::adapter::inbound::cli::{self, Cli, Commands};
use whaletrack::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = match Config::load_or_default(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match args.command {
        Commands::Wallets => cli::wallets::execute(&config, args.json),
        Commands::Transfers => cli::transfers::execute(&config, args.json).await,
        Commands::Console => cli::console::execute(&config).await,
        Commands::Run => {
            info!("whaletrack starting");
            tokio::select! {
                result = cli::run::execute(&config) => result,
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

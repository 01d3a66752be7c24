use anyhow::Result;
use dotenvy::dotenv;
use teloxide::Bot;
use tokio::signal;

use homework_bot::cli::{Cli, Commands};
use homework_bot::logging::init_logger;
use homework_bot::{Config, Poller, StatusClient, TelegramNotifier};

/// Main entry point for the homework bot
///
/// Reads configuration from the environment, builds the API client and the
/// Telegram notifier, then runs the poll loop until the process is stopped.
/// Exits with code 1 when a required environment variable is missing.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger()?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Startup contract: a broken environment is fatal.
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let client = StatusClient::new(config.endpoint.clone(), &config.practicum_token)?;
    let bot = Bot::new(config.telegram_token.clone());
    let notifier = TelegramNotifier::new(bot, config.chat.clone());
    let mut poller = Poller::new(client, notifier, config.retry_period);

    match cli.command {
        Some(Commands::Run { once: true }) => {
            let outcome = poller.run_cycle().await;
            log::info!("Single cycle finished: {outcome:?}");
        }
        Some(Commands::Run { once: false }) | None => {
            tokio::select! {
                _ = poller.run() => {}
                _ = signal::ctrl_c() => {
                    log::info!("Shutting down gracefully...");
                }
            }
        }
    }

    Ok(())
}

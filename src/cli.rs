use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(author, version, about = "Telegram bot that reports homework review status changes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (default when no subcommand is given)
    Run {
        /// Execute a single poll cycle and exit instead of looping
        #[arg(long)]
        once: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod investors;
mod lookup;
mod names;
mod output;
mod startups;

#[derive(Debug, Parser)]
#[command(name = "cbminer-cli")]
#[command(about = "CrunchBase funding-round report generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve company names and write the qualified-startup CSV report
    Startups,
    /// Resolve investor permalinks and write the investor CSV report
    Investors,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("nothing to do; try `cbminer-cli startups` or `cbminer-cli investors`");
        return Ok(());
    };

    let config = cbminer_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Startups => startups::run(&config).await,
        Commands::Investors => investors::run(&config).await,
    }
}

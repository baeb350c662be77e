mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use crawlcost_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Audit { url, json } => commands::audit::handle(&config, &url, json).await,
        cli::Commands::Score { doc_id, docs_dir, json } => {
            commands::score::handle(&config, &doc_id, docs_dir, json).await
        }
        cli::Commands::Scan { docs_dir, json } => {
            commands::scan::handle(&config, docs_dir, json).await
        }
        cli::Commands::Serve { host, port, docs_dir } => {
            commands::serve::handle(&config, host, port, docs_dir).await
        }
    }
}

//! message-server binary: serve the HTTP API or list stored messages.

use anyhow::Result;
use clap::Parser;
use message_server::{init_tracing, list_messages, load_config, run_server, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            database_url,
            seed,
        } => {
            let config = load_config(bind, database_url, seed)?;
            init_tracing(&config.log_file)?;
            run_server(config).await
        }
        Commands::List { database_url } => {
            let config = load_config(None, database_url, false)?;
            list_messages(config).await
        }
    }
}

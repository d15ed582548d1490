//! Process wiring: open the store, optionally seed it, then serve.
//!
//! The store is fully initialized before the listener is bound, so no request can
//! reach a missing table.

use anyhow::{Context, Result};
use std::sync::Arc;
use storage::{MessageRepository, MessageStore};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::config::ServerConfig;
use crate::seed::seed_demo_messages;
use crate::server::MessageServer;

/// Opens the repository and creates the schema. Any failure here is fatal for startup.
#[instrument(skip_all, fields(database_url = %config.database_url))]
pub async fn open_store(config: &ServerConfig) -> Result<Arc<dyn MessageStore>> {
    let repo = MessageRepository::new(&config.database_url)
        .await
        .with_context(|| format!("Open message store at {}", config.database_url))?;
    info!("Message store ready");
    Ok(Arc::new(repo))
}

/// Runs the HTTP service until Ctrl-C.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let addr = config.socket_addr()?;

    let store = open_store(&config).await?;

    if config.seed_demo_messages {
        let ids = seed_demo_messages(store.as_ref())
            .await
            .context("Seed demo messages")?;
        info!(?ids, "Seeded demo messages");
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Bind {}", addr))?;

    MessageServer::new(store).run(listener).await?;
    Ok(())
}

/// Prints every stored message to stdout, one per line.
pub async fn list_messages(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let store = open_store(&config).await?;

    let messages = store.find_all().await.context("List messages")?;
    if messages.is_empty() {
        println!("No messages (database: {}).", config.database_url);
        return Ok(());
    }
    for message in &messages {
        println!("{}", message);
    }
    Ok(())
}

//! ServerConfig: everything the process needs before it starts serving.

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "messages.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILE: &str = "logs/message-server.log";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// DATABASE_URL: SQLite file path or `sqlite:` URL
    pub database_url: String,
    /// BIND_ADDR
    pub bind_addr: String,
    /// LOG_FILE
    pub log_file: String,
    /// SEED_DEMO_MESSAGES: save two sample messages on boot
    pub seed_demo_messages: bool,
}

impl ServerConfig {
    /// Load from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let seed_demo_messages = env::var("SEED_DEMO_MESSAGES")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            bind_addr,
            log_file,
            seed_demo_messages,
        })
    }

    /// Validate config. Call after load() to fail fast before the store is opened.
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is set but empty");
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr.parse().map_err(|_| {
            anyhow::anyhow!(
                "BIND_ADDR is not a valid socket address: {}",
                self.bind_addr
            )
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "message-server")]
#[command(about = "Message storage service: serve HTTP, list stored messages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API (config from env; flags override).
    Serve {
        /// Overrides BIND_ADDR.
        #[arg(short, long)]
        bind: Option<String>,
        /// Overrides DATABASE_URL.
        #[arg(short, long)]
        database_url: Option<String>,
        /// Save the two demo messages before serving.
        #[arg(long)]
        seed: bool,
    },
    /// Print every stored message.
    List {
        /// Overrides DATABASE_URL.
        #[arg(short, long)]
        database_url: Option<String>,
    },
}

/// Load ServerConfig from environment; any provided value overrides its env var.
pub fn load_config(
    bind: Option<String>,
    database_url: Option<String>,
    seed: bool,
) -> Result<ServerConfig> {
    let mut config = ServerConfig::load()?;
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(database_url) = database_url {
        config.database_url = database_url;
    }
    config.seed_demo_messages |= seed;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_serve_with_flags() {
        let cli = Cli::parse_from([
            "message-server",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--database-url",
            "sqlite::memory:",
            "--seed",
        ]);
        match cli.command {
            Commands::Serve {
                bind,
                database_url,
                seed,
            } => {
                assert_eq!(bind.as_deref(), Some("127.0.0.1:9000"));
                assert_eq!(database_url.as_deref(), Some("sqlite::memory:"));
                assert!(seed);
            }
            Commands::List { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["message-server", "list"]);
        assert!(matches!(cli.command, Commands::List { database_url: None }));
    }

    #[test]
    #[serial]
    fn test_load_config_overrides_env() {
        std::env::set_var("BIND_ADDR", "0.0.0.0:1111");
        std::env::set_var("DATABASE_URL", "env.db");
        std::env::remove_var("SEED_DEMO_MESSAGES");

        let config = load_config(Some("127.0.0.1:2222".to_string()), None, true).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:2222");
        assert_eq!(config.database_url, "env.db");
        assert!(config.seed_demo_messages);

        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("DATABASE_URL");
    }
}

//! # message-server
//!
//! HTTP façade over the [`storage`] message store: `POST /**` saves, `GET /{id}` finds one,
//! `GET /**` lists all. Also carries the process wiring: config, tracing, CLI, demo seeding.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod routes;
pub mod runner;
pub mod seed;
pub mod server;

pub use cli::{load_config, Cli, Commands};
pub use config::ServerConfig;
pub use error::ApiError;
pub use logger::init_tracing;
pub use routes::{resolve_get, GetRoute};
pub use runner::{list_messages, open_store, run_server};
pub use seed::{demo_messages, seed_demo_messages};
pub use server::{AppState, MessageServer};

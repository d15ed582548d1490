//! Server configuration: bind address, log file, database, demo seeding. Loaded from env.

mod server_config;


pub use server_config::ServerConfig;

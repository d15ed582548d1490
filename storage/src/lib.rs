//! Storage crate: message persistence and the store abstraction.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Message, MessageRow
//! - [`schema`] – MessageTable (table and column names, DDL)
//! - [`repository`] – MessageStore trait
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod schema;
mod sqlite_pool;

pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{Message, MessageRow};
pub use repository::MessageStore;
pub use schema::MessageTable;
pub use sqlite_pool::SqlitePoolManager;

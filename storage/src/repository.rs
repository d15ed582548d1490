//! Store trait for message persistence. [`crate::MessageRepository`] is the SQLite implementation.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::Message;

/// Append-only message store: save, find_by_id, find_all.
///
/// Each call is atomic on its own; no call spans more than one transaction.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Inserts a new row from `author`, `body` and `at`; returns the id the engine assigned.
    async fn save(&self, message: &Message) -> Result<i64, StorageError>;
    /// Returns the message with the given id, or None if no row has it.
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, StorageError>;
    /// Returns every message in storage order; empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<Message>, StorageError>;
}

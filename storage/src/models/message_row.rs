//! Row form of a message as read back from the `messages` table.

use chrono::{DateTime, Utc};

use super::Message;

/// A persisted row; `id` is always present.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MessageRow {
    pub author: String,
    pub body: String,
    pub at: DateTime<Utc>,
    pub id: i64,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message::with_timestamp(row.author, row.body, row.at).identified(row.id)
    }
}

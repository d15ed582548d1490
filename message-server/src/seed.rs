//! Demo data saved on boot when seeding is enabled.

use storage::{Message, MessageStore, StorageError};
use tracing::info;

pub const DEMO_AUTHORS: [&str; 2] = ["ololo", "trololo"];
pub const DEMO_BODY: &str = "ololo trololo";

/// The two sample messages, unsaved.
pub fn demo_messages() -> Vec<Message> {
    DEMO_AUTHORS
        .iter()
        .map(|author| Message::new(*author, DEMO_BODY))
        .collect()
}

/// Saves the demo messages, then logs everything the store holds.
pub async fn seed_demo_messages(store: &dyn MessageStore) -> Result<Vec<i64>, StorageError> {
    let mut ids = Vec::new();
    for message in demo_messages() {
        ids.push(store.save(&message).await?);
    }

    for message in store.find_all().await? {
        info!(%message, "Stored message");
    }
    Ok(ids)
}

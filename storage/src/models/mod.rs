//! Storage models: the domain [`Message`] and its persisted row form [`MessageRow`].

mod message;
mod message_row;

pub use message::Message;
pub use message_row::MessageRow;

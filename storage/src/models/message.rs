//! Message model: the one entity the store persists.
//!
//! A `Message` never changes after construction. Saving produces an identified value
//! (see [`Message::identified`]) instead of filling in `id` on a shared one.
//!
//! On input `at` may be RFC 3339 or an offset-less ISO-8601 date-time, read as UTC.
//! On output it is always RFC 3339.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    author: String,
    body: String,
    #[serde(default = "Utc::now", deserialize_with = "deserialize_at")]
    at: DateTime<Utc>,
    /// Assigned by the store; ignored on input and omitted from output until set.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl Message {
    /// Creates an unsaved message stamped with the current time.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_timestamp(author, body, Utc::now())
    }

    /// Creates an unsaved message with a caller-supplied timestamp.
    pub fn with_timestamp(
        author: impl Into<String>,
        body: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            at,
            id: None,
        }
    }

    /// This message carrying the id the store assigned.
    pub fn identified(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// `None` until the message has been saved.
    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Parses `at` as RFC 3339, falling back to a naive ISO-8601 date-time taken as UTC.
fn parse_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_at(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid timestamp `{}`, expected ISO-8601", raw))
    })
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "#{} [{}] {}: {}",
                id,
                self.at.to_rfc3339(),
                self.author,
                self.body
            ),
            None => write!(f, "[{}] {}: {}", self.at.to_rfc3339(), self.author, self.body),
        }
    }
}

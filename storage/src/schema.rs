//! Table definition for persisted messages.
//!
//! One immutable value describes the table; the repository builds every statement from it.

/// Table and column names of the `messages` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTable {
    pub table: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub at: &'static str,
    pub id: &'static str,
}

impl MessageTable {
    /// The table used by [`crate::MessageRepository`].
    pub const DEFAULT: MessageTable = MessageTable {
        table: "messages",
        author: "author",
        body: "body",
        at: "at",
        id: "id",
    };

    /// Upper bound on author length in the column type; not enforced by the store.
    pub const AUTHOR_MAX_LEN: usize = 255;

    pub fn create_table_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {table} (\n    \
             {author} VARCHAR({max}) NOT NULL,\n    \
             {body} TEXT NOT NULL,\n    \
             {at} DATETIME NOT NULL,\n    \
             {id} INTEGER PRIMARY KEY AUTOINCREMENT\n)",
            table = self.table,
            author = self.author,
            max = Self::AUTHOR_MAX_LEN,
            body = self.body,
            at = self.at,
            id = self.id,
        )
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
            self.table, self.author, self.body, self.at
        )
    }

    /// Selects every column; rows come back in storage order.
    pub fn select_all_sql(&self) -> String {
        format!(
            "SELECT {}, {}, {}, {} FROM {}",
            self.author, self.body, self.at, self.id, self.table
        )
    }

    pub fn select_by_id_sql(&self) -> String {
        format!("{} WHERE {} = ?", self.select_all_sql(), self.id)
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

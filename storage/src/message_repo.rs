//! Message repository: SQLite persistence for messages.
//!
//! Uses SqlitePoolManager, MessageTable and the models (Message, MessageRow).
//! The schema is created before [`MessageRepository::new`] returns.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{Message, MessageRow};
use crate::repository::MessageStore;
use crate::schema::MessageTable;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
    table: MessageTable,
}

impl MessageRepository {
    /// Connects to `database_url` and ensures the `messages` table exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self {
            pool_manager,
            table: MessageTable::DEFAULT,
        };
        repo.initialize_schema().await?;
        Ok(repo)
    }

    /// Creates the table if it does not exist. Safe to call more than once.
    pub async fn initialize_schema(&self) -> Result<(), StorageError> {
        info!(table = self.table.table, "Creating database tables if not exist");

        let pool = self.pool_manager.pool();
        let schema_err = |e: sqlx::Error| StorageError::Schema(e.to_string());

        let mut tx = pool.begin().await.map_err(schema_err)?;
        sqlx::query(&self.table.create_table_sql())
            .execute(&mut *tx)
            .await
            .map_err(schema_err)?;
        tx.commit().await.map_err(schema_err)?;

        info!("Database tables created successfully");
        Ok(())
    }

    pub fn table(&self) -> &MessageTable {
        &self.table
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn save(&self, message: &Message) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let mut tx = pool.begin().await?;
        let result = sqlx::query(&self.table.insert_sql())
            .bind(message.author())
            .bind(message.body())
            .bind(message.at())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        let id = result.last_insert_rowid();
        info!(id, author = message.author(), "Saved message");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, StorageError> {
        let pool = self.pool_manager.pool();

        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, MessageRow>(&self.table.select_by_id_sql())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!(id, found = row.is_some(), "Looked up message");
        Ok(row.map(Message::from))
    }

    async fn find_all(&self) -> Result<Vec<Message>, StorageError> {
        let pool = self.pool_manager.pool();

        let mut tx = pool.begin().await?;
        let rows = sqlx::query_as::<_, MessageRow>(&self.table.select_all_sql())
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("Retrieved {} messages", rows.len());
        Ok(rows.into_iter().map(Message::from).collect())
    }
}

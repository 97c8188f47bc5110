use crate::domain::ValidationError;
use crate::domain::message::{Message, NewMessage};
use crate::error::{AppError, Result};
use crate::storage::DbPool;
use crate::storage::records::MessageRecord;
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync + std::fmt::Debug {
    /// Stores a new message and returns it with its assigned id.
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownAccount` if the author does not exist.
    async fn create(&self, message: &NewMessage) -> Result<Message>;

    /// Returns every message ordered by id.
    async fn find_all(&self) -> Result<Vec<Message>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Message>>;

    /// Returns the messages posted by one account ordered by id.
    async fn find_by_account(&self, account_id: i32) -> Result<Vec<Message>>;

    /// Replaces the text of a message. Returns the number of rows changed.
    async fn update_text(&self, id: i32, text: &str) -> Result<u64>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64>;
}

#[derive(Clone, Debug)]
pub struct PgMessageRepository {
    pool: DbPool,
}

impl PgMessageRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r"
            INSERT INTO messages (posted_by, message_text, time_posted_epoch)
            VALUES ($1, $2, $3)
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            ",
        )
        .bind(message.posted_by)
        .bind(&message.text)
        .bind(message.posted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e
                && db.is_foreign_key_violation()
            {
                return AppError::Validation(ValidationError::UnknownAccount(message.posted_by));
            }
            AppError::Database(e)
        })?;

        Ok(record.into())
    }

    async fn find_all(&self) -> Result<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            ORDER BY message_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Message>> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            WHERE message_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }

    async fn find_by_account(&self, account_id: i32) -> Result<Vec<Message>> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM messages
            WHERE posted_by = $1
            ORDER BY message_id ASC
            ",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn update_text(&self, id: i32, text: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE messages SET message_text = $1 WHERE message_id = $2")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE message_id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

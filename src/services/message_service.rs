use crate::domain::ValidationError;
use crate::domain::message::{Message, NewMessage, validate_text};
use crate::error::Result;
use crate::storage::{AccountRepository, MessageRepository};
use crate::telemetry::METER_NAME;
use opentelemetry::{global, metrics::Counter};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Metrics {
    created_total: Counter<u64>,
    updated_total: Counter<u64>,
    deleted_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter(METER_NAME);
        Self {
            created_total: meter
                .u64_counter("messages_created_total")
                .with_description("Total messages successfully created")
                .build(),
            updated_total: meter
                .u64_counter("messages_updated_total")
                .with_description("Total message text updates")
                .build(),
            deleted_total: meter.u64_counter("messages_deleted_total").with_description("Total messages deleted").build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
    accounts: Arc<dyn AccountRepository>,
    metrics: Metrics,
}

impl MessageService {
    #[must_use]
    pub fn new(repo: Arc<dyn MessageRepository>, accounts: Arc<dyn AccountRepository>) -> Self {
        Self { repo, accounts, metrics: Metrics::new() }
    }

    /// Creates a message.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the text is blank or too long, or if the
    /// author does not exist.
    #[tracing::instrument(skip(self, text), err(level = "warn"))]
    pub async fn create(&self, text: Option<String>, posted_by: Option<i32>, posted_at: Option<i64>) -> Result<Message> {
        let new_message = NewMessage::parse(text, posted_by, posted_at)?;

        if !self.accounts.exists_by_id(new_message.posted_by).await? {
            return Err(ValidationError::UnknownAccount(new_message.posted_by).into());
        }

        let message = self.repo.create(&new_message).await?;

        tracing::debug!(message_id = message.id, "Message created");
        self.metrics.created_total.add(1, &[]);

        Ok(message)
    }

    /// Returns every message.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn get_all(&self) -> Result<Vec<Message>> {
        self.repo.find_all().await
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn get_one(&self, id: i32) -> Result<Option<Message>> {
        self.repo.find_by_id(id).await
    }

    /// Deletes a message and returns how many were removed (0 or 1).
    ///
    /// # Errors
    /// Returns `AppError::Database` if the deletion fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let removed = self.repo.delete(id).await?;
        if removed > 0 {
            tracing::debug!("Message deleted");
            self.metrics.deleted_total.add(removed, &[]);
        }
        Ok(removed)
    }

    /// Replaces the text of an existing message and returns 1.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the text is invalid or no message has this id.
    #[tracing::instrument(skip(self, text), err(level = "warn"))]
    pub async fn update_text(&self, id: i32, text: Option<String>) -> Result<u64> {
        let text = validate_text(text)?;

        let updated = self.repo.update_text(id, &text).await?;
        if updated == 0 {
            return Err(ValidationError::UnknownMessage(id).into());
        }

        tracing::debug!("Message text updated");
        self.metrics.updated_total.add(1, &[]);

        Ok(updated)
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(skip(self), err)]
    pub async fn get_by_account(&self, account_id: i32) -> Result<Vec<Message>> {
        self.repo.find_by_account(account_id).await
    }
}

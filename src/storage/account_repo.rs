use crate::domain::account::Account;
use crate::error::{AppError, Result};
use crate::storage::DbPool;
use crate::storage::records::AccountRecord;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync + std::fmt::Debug {
    /// Stores a new account and returns it with its assigned id.
    ///
    /// # Errors
    /// Returns `AppError::DuplicateUsername` if the username is taken.
    async fn create(&self, username: &str, password: &str) -> Result<Account>;

    async fn exists_by_username(&self, username: &str) -> Result<bool>;

    async fn exists_by_id(&self, id: i32) -> Result<bool>;

    /// Finds the account whose username and password both match exactly.
    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Account>>;
}

#[derive(Clone, Debug)]
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, username: &str, password: &str) -> Result<Account> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r"
            INSERT INTO accounts (username, password)
            VALUES ($1, $2)
            RETURNING account_id, username, password
            ",
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e
                && db.is_unique_violation()
            {
                return AppError::DuplicateUsername;
            }
            AppError::Database(e)
        })?;

        Ok(record.into())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE account_id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r"
            SELECT account_id, username, password
            FROM accounts
            WHERE username = $1 AND password = $2
            ",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Into::into))
    }
}

use crate::config::DatabaseConfig;
use backon::{ExponentialBuilder, Retryable};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use std::time::Duration;

pub mod account_repo;
pub mod memory;
pub mod message_repo;
pub(crate) mod records;

pub use account_repo::{AccountRepository, PgAccountRepository};
pub use memory::InMemoryStore;
pub use message_repo::{MessageRepository, PgMessageRepository};

pub type DbPool = Pool<Postgres>;

/// Initializes the database connection pool, retrying with exponential backoff.
///
/// # Errors
/// Returns `sqlx::Error` if every connection attempt fails.
pub async fn init_pool(database_url: &str, config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let retry_strategy = ExponentialBuilder::default().with_max_times(config.connect_retries);

    (|| async {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(database_url)
            .await
    })
    .retry(&retry_strategy)
    .notify(|e, duration| {
        tracing::warn!(error = %e, retry_in = ?duration, "Database connection failed, retrying");
    })
    .await
}

/// Applies the embedded schema migrations.
///
/// # Errors
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// The repositories the services run against.
#[derive(Clone, Debug)]
pub struct Storage {
    pub accounts: Arc<dyn AccountRepository>,
    pub messages: Arc<dyn MessageRepository>,
    /// Present only for the Postgres backend; used by readiness checks.
    pub pool: Option<DbPool>,
}

impl Storage {
    #[must_use]
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            accounts: Arc::new(PgAccountRepository::new(pool.clone())),
            messages: Arc::new(PgMessageRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self { accounts: Arc::new(store.clone()), messages: Arc::new(store), pool: None }
    }
}

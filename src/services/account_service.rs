use crate::domain::account::{Account, validate_registration};
use crate::error::{AppError, Result};
use crate::storage::AccountRepository;
use crate::telemetry::METER_NAME;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Metrics {
    accounts_registered_total: Counter<u64>,
    logins_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter(METER_NAME);
        Self {
            accounts_registered_total: meter
                .u64_counter("accounts_registered_total")
                .with_description("Total number of successful account registrations")
                .build(),
            logins_total: meter.u64_counter("logins_total").with_description("Total number of login attempts").build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
    metrics: Metrics,
}

impl AccountService {
    #[must_use]
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Registers a new account.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the username is blank or the password too short.
    /// Returns `AppError::DuplicateUsername` if the username is already taken.
    #[tracing::instrument(
        skip(self, username, password),
        fields(account_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn register(&self, username: Option<String>, password: Option<String>) -> Result<Account> {
        let (username, password) = validate_registration(username, password)?;

        if self.repo.exists_by_username(&username).await? {
            return Err(AppError::DuplicateUsername);
        }

        let account = self.repo.create(&username, &password).await?;

        tracing::Span::current().record("account_id", account.id);
        tracing::info!("Account registered");
        self.metrics.accounts_registered_total.add(1, &[]);

        Ok(account)
    }

    /// Looks up the account matching both credentials. A missing field never matches.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the lookup fails.
    #[tracing::instrument(skip(self, username, password), fields(account_id = tracing::field::Empty), err)]
    pub async fn login(&self, username: Option<String>, password: Option<String>) -> Result<Option<Account>> {
        let (Some(username), Some(password)) = (username, password) else {
            tracing::debug!("Login failed: incomplete credentials");
            self.metrics.logins_total.add(1, &[KeyValue::new("status", "failure")]);
            return Ok(None);
        };

        let account = self.repo.find_by_credentials(&username, &password).await?;

        match &account {
            Some(a) => {
                tracing::Span::current().record("account_id", a.id);
                tracing::info!("Account logged in");
                self.metrics.logins_total.add(1, &[KeyValue::new("status", "success")]);
            }
            None => {
                tracing::warn!("Login failed: invalid credentials");
                self.metrics.logins_total.add(1, &[KeyValue::new("status", "failure")]);
            }
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::storage::InMemoryStore;

    fn service() -> AccountService {
        AccountService::new(Arc::new(InMemoryStore::new()))
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        let account = service.register(some("alice"), some("pass")).await.unwrap();
        assert_eq!(account.username, "alice");

        let found = service.login(some("alice"), some("pass")).await.unwrap();
        assert_eq!(found, Some(account));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = service();
        service.register(some("alice"), some("pass")).await.unwrap();
        let second = service.register(some("alice"), some("another")).await;
        assert!(matches!(second, Err(AppError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_register_validation_runs_before_duplicate_check() {
        let service = service();
        service.register(some("alice"), some("pass")).await.unwrap();
        let result = service.register(some("alice"), some("abc")).await;
        assert!(matches!(result, Err(AppError::Validation(ValidationError::PasswordTooShort))));
    }

    #[tokio::test]
    async fn test_login_mismatch_is_none() {
        let service = service();
        service.register(some("alice"), some("pass")).await.unwrap();

        assert_eq!(service.login(some("alice"), some("wrong")).await.unwrap(), None);
        assert_eq!(service.login(some("nobody"), some("pass")).await.unwrap(), None);
        assert_eq!(service.login(None, some("pass")).await.unwrap(), None);
    }
}

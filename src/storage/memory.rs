//! Process-local store used when no database is configured.

use crate::domain::ValidationError;
use crate::domain::account::Account;
use crate::domain::message::{Message, NewMessage};
use crate::error::{AppError, Result};
use crate::storage::{AccountRepository, MessageRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Implements both repositories over one shared state so that message authors
/// can be checked the way a foreign key would.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    accounts: BTreeMap<i32, Account>,
    messages: BTreeMap<i32, Message>,
    last_account_id: i32,
    last_message_id: i32,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: &mut i32) -> Result<i32> {
    *last = last.checked_add(1).ok_or(AppError::Internal)?;
    Ok(*last)
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create(&self, username: &str, password: &str) -> Result<Account> {
        let mut state = self.state.write().await;
        if state.accounts.values().any(|a| a.username == username) {
            return Err(AppError::DuplicateUsername);
        }

        let id = next_id(&mut state.last_account_id)?;
        let account = Account { id, username: username.to_string(), password: password.to_string() };
        state.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        Ok(self.state.read().await.accounts.values().any(|a| a.username == username))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.state.read().await.accounts.contains_key(&id))
    }

    async fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<Account>> {
        let state = self.state.read().await;
        Ok(state.accounts.values().find(|a| a.username == username && a.password == password).cloned())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, message: &NewMessage) -> Result<Message> {
        let mut state = self.state.write().await;
        if !state.accounts.contains_key(&message.posted_by) {
            return Err(ValidationError::UnknownAccount(message.posted_by).into());
        }

        let id = next_id(&mut state.last_message_id)?;
        let stored = Message {
            id,
            posted_by: message.posted_by,
            text: message.text.clone(),
            posted_at: message.posted_at,
        };
        state.messages.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Message>> {
        Ok(self.state.read().await.messages.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Message>> {
        Ok(self.state.read().await.messages.get(&id).cloned())
    }

    async fn find_by_account(&self, account_id: i32) -> Result<Vec<Message>> {
        let state = self.state.read().await;
        Ok(state.messages.values().filter(|m| m.posted_by == account_id).cloned().collect())
    }

    async fn update_text(&self, id: i32, text: &str) -> Result<u64> {
        let mut state = self.state.write().await;
        match state.messages.get_mut(&id) {
            Some(message) => {
                message.text = text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        Ok(u64::from(self.state.write().await.messages.remove(&id).is_some()))
    }
}

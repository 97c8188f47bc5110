use crate::domain::account::Account;
use crate::domain::message::Message;

#[derive(sqlx::FromRow)]
pub(crate) struct AccountRecord {
    pub account_id: i32,
    pub username: String,
    pub password: String,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self { id: record.account_id, username: record.username, password: record.password }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct MessageRecord {
    pub message_id: i32,
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: Option<i64>,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.message_id,
            posted_by: record.posted_by,
            text: record.message_text,
            posted_at: record.time_posted_epoch,
        }
    }
}

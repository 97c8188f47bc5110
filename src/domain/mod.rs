use crate::domain::account::MIN_PASSWORD_LENGTH;
use crate::domain::message::MAX_MESSAGE_LENGTH;
use thiserror::Error;

pub mod account;
pub mod message;

/// Reasons a request is rejected before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("username must not be blank")]
    BlankUsername,
    #[error("password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
    #[error("message text must not be blank")]
    BlankText,
    #[error("message text must be at most {} characters", MAX_MESSAGE_LENGTH)]
    TextTooLong,
    #[error("account {0} does not exist")]
    UnknownAccount(i32),
    #[error("message {0} does not exist")]
    UnknownMessage(i32),
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

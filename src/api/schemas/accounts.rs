use crate::domain::account::Account;
use serde::{Deserialize, Serialize};

/// Body of both `/register` and `/login`. Fields are optional so that a missing
/// value is reported by validation rather than by the JSON decoder.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: i32,
    pub username: String,
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self { account_id: account.id, username: account.username, password: account.password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_wire_format() {
        let account = Account { id: 7, username: "dave".into(), password: "secret".into() };
        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json, serde_json::json!({"accountId": 7, "username": "dave", "password": "secret"}));
    }

    #[test]
    fn test_credentials_tolerate_missing_and_extra_fields() {
        let creds: Credentials = serde_json::from_str(r#"{"accountId": 3, "username": "dave"}"#).unwrap();
        assert_eq!(creds.username.as_deref(), Some("dave"));
        assert!(creds.password.is_none());
    }
}

use crate::domain::{ValidationError, is_blank};

/// Minimum number of characters a password must have.
pub const MIN_PASSWORD_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Checks registration input and returns the owned credentials.
///
/// # Errors
/// Returns a `ValidationError` if a field is missing, the username is blank or the
/// password is shorter than [`MIN_PASSWORD_LENGTH`].
pub fn validate_registration(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ValidationError> {
    let username = username.ok_or(ValidationError::MissingField("username"))?;
    let password = password.ok_or(ValidationError::MissingField("password"))?;

    if is_blank(&username) {
        return Err(ValidationError::BlankUsername);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok((username, password))
}

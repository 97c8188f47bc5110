use crate::api::AppState;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::schemas::accounts::{AccountResponse, Credentials};
use crate::api::schemas::messages::MessageResponse;
use crate::error::{AppError, Result};
use axum::{Json, extract::State, response::IntoResponse};

/// Registers a new account.
///
/// # Errors
/// Returns `AppError::Validation` for a blank username or short password.
/// Returns `AppError::DuplicateUsername` if the username is taken.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> Result<impl IntoResponse> {
    let account = state.account_service.register(payload.username, payload.password).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Returns the account matching the credentials.
///
/// # Errors
/// Returns `AppError::InvalidCredentials` if no account matches.
pub async fn login(State(state): State<AppState>, JsonBody(payload): JsonBody<Credentials>) -> Result<impl IntoResponse> {
    let account =
        state.account_service.login(payload.username, payload.password).await?.ok_or(AppError::InvalidCredentials)?;
    Ok(Json(AccountResponse::from(account)))
}

/// Lists the messages posted by one account. Unknown accounts yield an empty list.
pub async fn list_messages(
    State(state): State<AppState>,
    PathParam(account_id): PathParam<i32>,
) -> Result<impl IntoResponse> {
    let messages = state.message_service.get_by_account(account_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect::<Vec<_>>()))
}

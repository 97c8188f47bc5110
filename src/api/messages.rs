use crate::api::AppState;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::schemas::messages::{CreateMessage, MessageResponse, UpdateMessage};
use crate::error::Result;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Creates a message.
///
/// # Errors
/// Returns `AppError::Validation` if the text is blank or too long, or the author does not exist.
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateMessage>,
) -> Result<impl IntoResponse> {
    let message = state
        .message_service
        .create(payload.message_text, payload.posted_by, payload.time_posted_epoch)
        .await?;
    Ok(Json(MessageResponse::from(message)))
}

pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.get_all().await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect::<Vec<_>>()))
}

/// Returns the message, or an empty 200 response if it does not exist.
pub async fn get_message(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Response> {
    Ok(match state.message_service.get_one(id).await? {
        Some(message) => Json(MessageResponse::from(message)).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// Deletes the message. Responds with `1` when a row was removed and an empty body otherwise.
pub async fn delete_message(State(state): State<AppState>, PathParam(id): PathParam<i32>) -> Result<Response> {
    let removed = state.message_service.delete(id).await?;
    Ok(if removed == 1 { Json(removed).into_response() } else { StatusCode::OK.into_response() })
}

/// Replaces the message text and responds with `1`.
///
/// # Errors
/// Returns `AppError::Validation` if the text is invalid or the message does not exist.
pub async fn update_message(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateMessage>,
) -> Result<impl IntoResponse> {
    let updated = state.message_service.update_text(id, payload.message_text).await?;
    Ok(Json(updated))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chat::{ChatRequestDto, ChatResponseDto},
    },
    server::{
        error::AppError, model::chat::ChatParams, service::chat::ChatService, state::AppState,
    },
};

/// Tag for grouping chat endpoints in OpenAPI documentation
pub static CHAT_TAG: &str = "chat";

/// Ask the event assistant a question.
///
/// The assistant knows about approved upcoming events. Send earlier turns of the
/// conversation in `history`; only the most recent ones are forwarded.
///
/// # Returns
/// - `200 OK` - The assistant's reply
/// - `400 Bad Request` - Empty or overlong message
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `502 Bad Gateway` - The completions API failed
/// - `503 Service Unavailable` - Chat is not configured
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = CHAT_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponseDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 502, description = "Upstream service error", body = ErrorDto),
        (status = 503, description = "Chat assistant not configured", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ChatParams::from_dto(payload)?;

    let reply = ChatService::new(&state.db, &state.http_client, &state.chat)
        .reply(params)
        .await?;

    Ok((StatusCode::OK, Json(ChatResponseDto { reply })))
}

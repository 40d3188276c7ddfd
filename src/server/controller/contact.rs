use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactMessageDto, CreateContactMessageDto, PaginatedContactMessagesDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::contact::{ContactMessageQuery, CreateContactMessageParams},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

#[derive(Deserialize)]
pub struct InboxParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default)]
    pub unread: bool,
}

fn default_per_page() -> u64 {
    20
}

/// Send a message through the public contact form.
///
/// # Returns
/// - `201 Created` - Message stored
/// - `400 Bad Request` - Invalid name, e-mail or message
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Successfully sent message", body = ContactMessageDto),
        (status = 400, description = "Invalid message data", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateContactMessageParams::from_dto(payload)?;

    let message = ContactService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get the contact inbox, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read contact messages
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `params` - Pagination and the unread-only switch
///
/// # Returns
/// - `200 OK` - Paginated messages plus the overall unread count
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/contact",
    tag = CONTACT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("unread" = Option<bool>, Query, description = "Only unread messages (default: false)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved messages", body = PaginatedContactMessagesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_contact_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<InboxParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let messages = ContactService::new(&state.db)
        .list(ContactMessageQuery {
            page: params.page,
            per_page: params.per_page,
            unread_only: params.unread,
        })
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/contact/{id}/read",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Successfully marked message as read", body = ContactMessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_contact_message_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_read(state, headers, id, true).await
}

#[utoipa::path(
    post,
    path = "/api/admin/contact/{id}/unread",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Successfully marked message as unread", body = ContactMessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_contact_message_unread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_read(state, headers, id, false).await
}

/// Delete a contact message.
#[utoipa::path(
    delete,
    path = "/api/admin/contact/{id}",
    tag = CONTACT_TAG,
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted message"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_contact_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ContactService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn set_read(
    state: AppState,
    headers: HeaderMap,
    id: i32,
    read: bool,
) -> Result<(StatusCode, Json<ContactMessageDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let message = ContactService::new(&state.db).set_read(id, read).await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

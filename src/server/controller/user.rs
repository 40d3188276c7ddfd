use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /api/admin/users - List all admin accounts
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK`: JSON array of UserDto ordered by username
/// - `401 Unauthorized` / `403 Forbidden`: Not logged in or not an admin
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_users().await?;

    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// POST /api/admin/users - Create another admin account
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Returns
/// - `201 Created`: The new account
/// - `400 Bad Request`: Invalid username or password, or username taken
/// - `401 Unauthorized` / `403 Forbidden`: Not logged in or not an admin
/// - `500 Internal Server Error`: Database or hashing error
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).create_user(params).await?;
    tracing::info!("Admin {} created account {}", admin.username, user.username);

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// DELETE /api/admin/users/{id} - Delete an account
///
/// An admin cannot delete their own account.
///
/// # Returns
/// - `204 No Content`: Account deleted
/// - `400 Bad Request`: Attempt to delete the calling account
/// - `401 Unauthorized` / `403 Forbidden`: Not logged in or not an admin
/// - `404 Not Found`: No such account
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete_user(admin.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

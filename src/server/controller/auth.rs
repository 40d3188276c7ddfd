use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Returns a bearer token to send as `Authorization: Bearer <token>` on admin requests.
/// Unknown usernames and wrong passwords produce the same response.
///
/// # Returns
/// - `200 OK` - Token and the logged-in user
/// - `401 Unauthorized` - Invalid credentials
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the user the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

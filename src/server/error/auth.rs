use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry or claim validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Username unknown or password mismatch during login.
    ///
    /// Both cases share one variant so responses never reveal which part was wrong.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Token was valid but the user it names no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

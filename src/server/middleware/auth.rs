use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Resolves the caller from the bearer token and checks every permission.
    ///
    /// Permissions are checked against the stored user, not the token claims, so a
    /// revoked admin loses access before their token expires.
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.bearer_token()? else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an admin route without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the caller if a valid token is present.
    ///
    /// Missing, malformed or stale tokens yield `None`; only database errors fail.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.require(&[]).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(err)) => {
                tracing::debug!("Treating request as anonymous: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Token from an `Authorization: Bearer` header, if any.
    fn bearer_token(&self) -> Result<Option<&'a str>, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

        match value.split_once(' ') {
            Some((scheme, token))
                if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
            {
                Ok(Some(token.trim()))
            }
            _ => Err(AuthError::InvalidToken(
                "Authorization header is not a bearer token".to_string(),
            )),
        }
    }
}

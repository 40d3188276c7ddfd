//! Username/password login and bearer tokens.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
    util::password::{verify_dummy, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords fail with the same error after one bcrypt check.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials valid
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_username(username.trim()).await? else {
            tracing::debug!("Login attempt for unknown user '{}'", username);
            verify_dummy(password).await?;
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash).await? {
            tracing::debug!("Wrong password for user {}", credentials.user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&credentials.user)?;
        tracing::info!("User {} logged in", credentials.user.username);

        Ok((token, credentials.user))
    }
}

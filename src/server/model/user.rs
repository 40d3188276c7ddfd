//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, util::validate},
};

const MIN_PASSWORD_CHARS: usize = 8;
const MAX_PASSWORD_CHARS: usize = 128;

/// Admin account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            admin: self.admin,
            created_at: self.created_at,
        }
    }
}

/// A user together with the stored hash, only used while checking a login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated input for creating an account. The password is still plaintext.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub admin: bool,
}

impl CreateUserParams {
    /// Usernames are 3 to 50 characters of letters, digits, `_`, `-` or `.`.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let username = validate::text("Username", &dto.username, 3, 50)?;
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(AppError::BadRequest(
                "Username may only contain letters, digits, '_', '-' and '.'".to_string(),
            ));
        }

        let password_len = dto.password.chars().count();
        if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&password_len) {
            return Err(AppError::BadRequest(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_CHARS, MAX_PASSWORD_CHARS
            )));
        }

        Ok(Self {
            username,
            password: dto.password,
            admin: true,
        })
    }
}

//! User service for business logic.
//!
//! This module provides the `UserService` for managing admin accounts. It orchestrates
//! account creation with password hashing, listing and deletion, and the startup
//! bootstrap that guarantees at least one admin exists.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, User},
    util::password::hash_password,
};

const GENERATED_PASSWORD_LEN: usize = 24;
const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Outcome of the startup admin check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminBootstrap {
    /// At least one admin already existed.
    AlreadyPresent,
    /// An admin was created with the configured password.
    Created { username: String },
    /// An admin was created with a generated password, to be shown once.
    CreatedWithGeneratedPassword { username: String, password: String },
}

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for user creation, listing and deletion.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by username.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Creates an account, hashing its password.
    ///
    /// # Returns
    /// - `Ok(User)` - Account created
    /// - `Err(AppError::BadRequest)` - Username already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.username_exists(&params.username).await? {
            return Err(taken(&params.username));
        }

        let hash = hash_password(&params.password).await?;
        let user = repo
            .create(&params.username, &hash, params.admin)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    taken(&params.username)
                } else {
                    err.into()
                }
            })?;
        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Deletes an account on behalf of `acting_user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Attempt to delete one's own account
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete_user(&self, acting_user_id: i32, id: i32) -> Result<(), AppError> {
        if acting_user_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        tracing::info!("User {} deleted user {}", acting_user_id, id);

        Ok(())
    }

    /// Creates the first admin when none exists.
    ///
    /// Uses the given username and password when provided; otherwise the username
    /// defaults to `admin` and a random password is generated.
    pub async fn ensure_admin(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AdminBootstrap, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.admin_exists().await? {
            return Ok(AdminBootstrap::AlreadyPresent);
        }

        let username = username.unwrap_or(DEFAULT_ADMIN_USERNAME).to_string();
        let generated = password.is_none();
        let password = match password {
            Some(p) => p.to_string(),
            None => generate_password(),
        };

        let hash = hash_password(&password).await?;
        repo.create(&username, &hash, true).await?;

        Ok(if generated {
            AdminBootstrap::CreatedWithGeneratedPassword { username, password }
        } else {
            AdminBootstrap::Created { username }
        })
    }
}

/// Generates a random alphanumeric password for the bootstrap admin.
fn taken(username: &str) -> AppError {
    AppError::BadRequest(format!("Username '{}' is already taken", username))
}

fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

//! bcrypt password hashing.
//!
//! bcrypt is CPU-bound, so both operations run on tokio's blocking pool.

use tokio::sync::OnceCell;

use crate::server::error::{internal::InternalError, AppError};

/// Hash checked against when a login names no stored account.
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

/// Hashes a plaintext password with the default bcrypt cost.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(hash)
}

/// Checks a plaintext password against a stored hash.
///
/// A stored value that is not a bcrypt hash never matches.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::from)?
        .unwrap_or(false);

    Ok(matches)
}

/// Runs a bcrypt verification that can never succeed, matching the cost of a real check.
pub async fn verify_dummy(password: &str) -> Result<(), AppError> {
    let hash = DUMMY_HASH
        .get_or_try_init(|| hash_password("no-such-account"))
        .await?;
    verify_password(password, hash).await?;

    Ok(())
}

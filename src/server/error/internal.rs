use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Signing a JWT failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}

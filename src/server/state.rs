//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for the chat completions API
//! - Token service for issuing and verifying bearer tokens
//! - Chat assistant configuration

use crate::server::{config::ChatConfig, service::auth::token::TokenService};
use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `TokenService` holds the pre-built signing and verification keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with a request timeout and without redirects. Used by the chat
    /// assistant to reach the completions endpoint.
    pub http_client: reqwest::Client,

    /// Issues tokens at login and verifies them in `AuthGuard`.
    pub tokens: TokenService,

    /// Chat assistant settings; the assistant is disabled when no API key is set.
    pub chat: ChatConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `tokens` - Bearer token service
    /// - `chat` - Chat assistant configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: TokenService,
        chat: ChatConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens,
            chat,
        }
    }
}

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::user::{AdminBootstrap, UserService},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to the Postgres database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled so that a misconfigured upstream URL cannot bounce requests
/// carrying the API key to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with timeout and redirect policy applied
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Makes sure at least one admin account exists.
///
/// Uses `ADMIN_USERNAME`/`ADMIN_PASSWORD` when set. Otherwise a random password is
/// generated and written to the log once; it is never stored in plain text.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let outcome = UserService::new(db)
        .ensure_admin(
            config.admin_username.as_deref(),
            config.admin_password.as_deref(),
        )
        .await?;

    match outcome {
        AdminBootstrap::AlreadyPresent => {
            tracing::debug!("Admin account present, skipping bootstrap");
        }
        AdminBootstrap::Created { username } => {
            tracing::info!("Created admin account '{}'", username);
        }
        AdminBootstrap::CreatedWithGeneratedPassword { username, password } => {
            tracing::warn!(
                "No admin account existed. Created '{}' with password: {}",
                username,
                password
            );
            tracing::warn!("Log in and create a personal admin account, then delete this one.");
        }
    }

    Ok(())
}

/// Builds the CORS layer.
///
/// Restricted to `CORS_ORIGIN` when configured, permissive otherwise.
pub fn build_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}

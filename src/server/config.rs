use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 365;
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Settings for the chat-completions backend used by the event assistant.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// `None` disables the chat endpoint.
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub cors_origin: Option<String>,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    pub chat: ChatConfig,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: parsed("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            cors_origin: optional("CORS_ORIGIN"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: parsed_positive_hours("JWT_EXPIRY_HOURS")?,
            chat: ChatConfig {
                api_key: optional("OPENAI_API_KEY"),
                model: optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                api_url: optional("OPENAI_API_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            },
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = optional(name).unwrap_or_else(|| default.to_string());
    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })
}

fn parsed_positive_hours(name: &str) -> Result<i64, ConfigError> {
    let hours: i64 = parsed(name, &DEFAULT_JWT_EXPIRY_HOURS.to_string())?;
    checked_expiry_hours(name, hours)
}

/// Accepts `1..=MAX_JWT_EXPIRY_HOURS`.
fn checked_expiry_hours(name: &str, hours: i64) -> Result<i64, ConfigError> {
    if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&hours) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: hours.to_string(),
            reason: format!("must be between 1 and {} hours", MAX_JWT_EXPIRY_HOURS),
        });
    }
    Ok(hours)
}

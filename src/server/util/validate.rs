//! Field-level checks applied when converting request DTOs into domain params.
//!
//! Every check returns `AppError::BadRequest` with a message naming the field, so a
//! failed conversion can be returned to the client directly.

use url::Url;

use crate::server::error::AppError;

/// Trims `value` and checks its character count lies in `min..=max`.
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();

    if len < min {
        return Err(if min == 1 {
            AppError::BadRequest(format!("{} is required", field))
        } else {
            AppError::BadRequest(format!("{} must be at least {} characters", field, min))
        });
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(trimmed.to_string())
}

/// Trims an optional value, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks that `value` looks like an e-mail address: one `@`, a non-empty local part and a
/// dotted domain without whitespace.
pub fn email(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    let invalid = || AppError::BadRequest(format!("{} must be a valid e-mail address", field));

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.chars().any(char::is_whitespace);

    if !well_formed || trimmed.len() > 254 {
        return Err(invalid());
    }

    Ok(trimmed.to_string())
}

/// Checks that `value` is an absolute `http` or `https` URL.
pub fn http_url(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|_| AppError::BadRequest(format!("{} must be a valid URL", field)))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(trimmed.to_string()),
        _ => Err(AppError::BadRequest(format!(
            "{} must be an http or https URL",
            field
        ))),
    }
}

/// Applies `http_url` to an optional value, treating blank input as absent.
pub fn optional_http_url(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    optional_text(value)
        .map(|v| http_url(field, &v))
        .transpose()
}

/// Checks that the row offset of a zero-based `page` fits a signed 64-bit `OFFSET`.
pub fn page(page: u64, per_page: u64) -> Result<(), AppError> {
    match page.checked_mul(per_page) {
        Some(offset) if i64::try_from(offset).is_ok() => Ok(()),
        _ => Err(AppError::BadRequest(format!("Page {} is out of range", page))),
    }
}

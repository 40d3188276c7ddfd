use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryKind, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

#[derive(Deserialize)]
pub struct KindParams {
    pub kind: Option<String>,
}

/// Get categories, optionally restricted to one kind.
///
/// Returns categories ordered by kind, then name. Used to populate the genre,
/// setting and event type dropdowns.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `kind` (`genre`, `setting` or `event_type`)
///
/// # Returns
/// - `200 OK` - List of categories
/// - `400 Bad Request` - Unknown kind
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    params(
        ("kind" = Option<String>, Query, description = "genre, setting or event_type")
    ),
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 400, description = "Unknown category kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    Query(params): Query<KindParams>,
) -> Result<impl IntoResponse, AppError> {
    let kind = params
        .kind
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .map(|k| k.trim().parse::<CategoryKind>())
        .transpose()
        .map_err(AppError::BadRequest)?;

    let categories = CategoryService::new(&state.db).list(kind).await?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Get a specific category by ID.
///
/// # Returns
/// - `200 OK` - Category details
/// - `404 Not Found` - Category not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Create a new category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `201 Created` - Successfully created category
/// - `400 Bad Request` - Invalid name or a category with that name already exists
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    // Convert DTO to server model
    let params = CreateCategoryParams::from_dto(payload)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Rename a category.
///
/// Events that reference the old name are updated to the new one.
///
/// # Access Control
/// - `Admin` - Only admins can rename categories
///
/// # Returns
/// - `200 OK` - Renamed category
/// - `400 Bad Request` - Invalid name or name already taken within the kind
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Category not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateCategoryParams::from_dto(id, payload)?;

    let category = CategoryService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a category.
///
/// Refused while any event still references the category.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
///
/// # Returns
/// - `204 No Content` - Successfully deleted category
/// - `400 Bad Request` - Category still in use
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Category not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 400, description = "Category still in use", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

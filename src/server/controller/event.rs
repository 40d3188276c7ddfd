use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        event::{
            CreateEventDto, EventCountsDto, EventDto, EventPinDto, PaginatedEventsDto,
            UpdateEventDto,
        },
    },
    server::{
        error::AppError,
        location::LocationSelection,
        middleware::auth::{AuthGuard, Permission},
        model::{
            event::{
                CreateEventParams, Event, EventFilter, EventStatus, UpdateEventParams,
                DEFAULT_PER_PAGE,
            },
            user::User,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Filter and pagination query shared by the event listing endpoints.
///
/// `tags` is a comma-separated list. `status` is only honoured for admins.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    pub genre: Option<String>,
    pub setting: Option<String>,
    pub event_type: Option<String>,
    /// Comma-separated tags; an event matches when it carries any of them
    pub tags: Option<String>,
    /// Case-insensitive text search over title, description, venue and city
    pub search: Option<String>,
    /// `approved`, `pending` or `all`
    pub status: Option<String>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub featured: bool,
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 20, max: 100)
    pub per_page: Option<u64>,
}

impl EventQuery {
    fn into_filter(self, status: EventStatus) -> EventFilter {
        EventFilter {
            genre: self.genre,
            setting: self.setting,
            event_type: self.event_type,
            tags: self
                .tags
                .map(|tags| tags.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
            search: self.search,
            status,
            location: LocationSelection::new(self.continent, self.country, self.city),
            upcoming: self.upcoming,
            featured: self.featured,
            page: self.page,
            per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Parses the requested status, falling back to `default` when none was given.
    fn status_or(&self, default: EventStatus) -> Result<EventStatus, AppError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(status) => status.parse(),
        }
    }
}

fn is_admin(caller: &Option<User>) -> bool {
    caller.as_ref().is_some_and(|user| user.admin)
}

fn not_found() -> AppError {
    AppError::NotFound("Event not found".to_string())
}

/// List events.
///
/// Returns a page of events matching the given filter, ordered by start date.
/// Anonymous callers only ever see approved events; admins may pass `status` to
/// include the review queue.
///
/// # Access Control
/// - Public; `status` is ignored unless the caller is an admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying an optional bearer token
/// - `query` - Filter facets and pagination
///
/// # Returns
/// - `200 OK` - Paginated list of events
/// - `400 Bad Request` - Unknown status value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let status = if is_admin(&caller) {
        query.status_or(EventStatus::Approved)?
    } else {
        EventStatus::Approved
    };

    let events = EventService::new(&state.db)
        .list(query.into_filter(status))
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Get map pins.
///
/// Returns approved events matching the filter that have coordinates, reduced to the
/// fields the map needs. Pagination parameters are ignored.
///
/// # Returns
/// - `200 OK` - List of map pins
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/map",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Successfully retrieved map pins", body = Vec<EventPinDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_map_pins(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .map_pins(query.into_filter(EventStatus::Approved))
        .await?;

    let pins: Vec<EventPinDto> = events.into_iter().filter_map(Event::into_pin).collect();

    Ok((StatusCode::OK, Json(pins)))
}

/// Get tags used by approved events, sorted alphabetically.
#[utoipa::path(
    get,
    path = "/api/events/tags",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = EventService::new(&state.db).tags().await?;

    Ok((StatusCode::OK, Json(tags)))
}

/// Get a specific event by ID.
///
/// Pending events are reported as missing unless the caller is an admin.
///
/// # Access Control
/// - Public for approved events
/// - `Admin` - Required to see pending events
///
/// # Returns
/// - `200 OK` - Event details
/// - `404 Not Found` - Event not found or not visible to the caller
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let event = EventService::new(&state.db)
        .get_by_id(id, is_admin(&caller))
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Submit a new event.
///
/// Public submissions land in the review queue and are not listed until an admin
/// approves them. Events created by an authenticated admin are approved right away.
///
/// # Access Control
/// - Public (rate limited)
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying an optional bearer token
/// - `payload` - Event data
///
/// # Returns
/// - `201 Created` - Event stored
/// - `400 Bad Request` - Invalid event data, unknown location or category
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully submitted event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let service = EventService::new(&state.db);

    let event = if is_admin(&caller) {
        service
            .create(CreateEventParams::from_dto(payload, true)?)
            .await?
    } else {
        service
            .submit(CreateEventParams::from_dto(payload, false)?)
            .await?
    };

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// List events for the admin dashboard.
///
/// Same filters as the public listing, but `status` defaults to `all`.
///
/// # Access Control
/// - `Admin` - Only admins can list unapproved events
///
/// # Returns
/// - `200 OK` - Paginated list of events
/// - `400 Bad Request` - Unknown status value
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Successfully retrieved events", body = PaginatedEventsDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = query.status_or(EventStatus::All)?;
    let events = EventService::new(&state.db)
        .list(query.into_filter(status))
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// List events waiting for review, soonest first.
#[utoipa::path(
    get,
    path = "/api/admin/events/pending",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Successfully retrieved pending events", body = PaginatedEventsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let events = EventService::new(&state.db)
        .list(query.into_filter(EventStatus::Pending))
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto())))
}

/// Count approved and pending events.
#[utoipa::path(
    get,
    path = "/api/admin/events/counts",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully counted events", body = EventCountsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_event_counts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let counts = EventService::new(&state.db).counts().await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Update an event.
///
/// Replaces every editable field and the tag list. `approved` and `featured` keep
/// their current values when omitted from the payload.
///
/// # Access Control
/// - `Admin` - Only admins can edit events
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Event ID to update
/// - `payload` - Replacement event data
///
/// # Returns
/// - `200 OK` - Updated event
/// - `400 Bad Request` - Invalid event data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateEventParams::from_dto(id, payload)?;

    let event = EventService::new(&state.db)
        .update(params)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event together with its tags.
///
/// # Returns
/// - `204 No Content` - Event deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Event not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !EventService::new(&state.db).delete(id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Approve a pending event so it shows up publicly.
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/approve",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully approved event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn approve_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .approve(id)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!("Event {} approved", id);

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Move an event back into the review queue.
#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/unapprove",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully unapproved event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unapprove_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .unapprove(id)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!("Event {} moved back to review", id);

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/feature",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully featured event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn feature_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_featured(state, headers, id, true).await
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/unfeature",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully unfeatured event", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unfeature_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    set_featured(state, headers, id, false).await
}

async fn set_featured(
    state: AppState,
    headers: HeaderMap,
    id: i32,
    featured: bool,
) -> Result<(StatusCode, Json<EventDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .set_featured(id, featured)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{get_current_user, login},
        category::{
            create_category, delete_category, get_categories, get_category_by_id,
            update_category,
        },
        chat::chat,
        contact::{
            delete_contact_message, get_contact_messages, mark_contact_message_read,
            mark_contact_message_unread, submit_contact_message,
        },
        event::{
            approve_event, delete_event, feature_event, get_admin_events, get_event_by_id,
            get_event_counts, get_event_tags, get_events, get_map_pins, get_pending_events,
            submit_event, unapprove_event, unfeature_event, update_event,
        },
        location::{get_cities, get_continents, get_countries, get_locations},
        user::{create_user, delete_user, get_users},
    },
    docs::ApiDoc,
    state::AppState,
};

/// Seconds until one more request is allowed per client IP.
const RATE_LIMIT_REPLENISH_SECS: u64 = 6;
/// Requests a client IP may send in a burst.
const RATE_LIMIT_BURST: u32 = 10;

pub fn router() -> Router<AppState> {
    api_router(true)
}

/// Builds all API routes plus the Swagger UI.
///
/// Public write endpoints are rate limited per client IP when `rate_limited` is set,
/// which requires the service to be served with `ConnectInfo<SocketAddr>`.
pub fn api_router(rate_limited: bool) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(public_write_routes(rate_limited))
        .merge(admin_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(get_events))
        .route("/api/events/map", get(get_map_pins))
        .route("/api/events/tags", get(get_event_tags))
        .route("/api/events/{id}", get(get_event_by_id))
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(get_category_by_id))
        .route("/api/auth/me", get(get_current_user))
        .route("/api/locations", get(get_locations))
        .route("/api/locations/continents", get(get_continents))
        .route(
            "/api/locations/continents/{continent}/countries",
            get(get_countries),
        )
        .route(
            "/api/locations/continents/{continent}/countries/{country}/cities",
            get(get_cities),
        )
}

fn public_write_routes(rate_limited: bool) -> Router<AppState> {
    let routes = Router::new()
        .route("/api/events", post(submit_event))
        .route("/api/contact", post(submit_contact_message))
        .route("/api/chat", post(chat))
        .route("/api/auth/login", post(login));

    if !rate_limited {
        return routes;
    }

    match GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_REPLENISH_SECS)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
    {
        Some(config) => routes.layer(GovernorLayer::new(config)),
        None => {
            tracing::warn!("Invalid rate limit settings, public write endpoints are unthrottled");
            routes
        }
    }
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/events", get(get_admin_events))
        .route("/api/admin/events/pending", get(get_pending_events))
        .route("/api/admin/events/counts", get(get_event_counts))
        .route(
            "/api/admin/events/{id}",
            put(update_event).delete(delete_event),
        )
        .route("/api/admin/events/{id}/approve", post(approve_event))
        .route("/api/admin/events/{id}/unapprove", post(unapprove_event))
        .route("/api/admin/events/{id}/feature", post(feature_event))
        .route("/api/admin/events/{id}/unfeature", post(unfeature_event))
        .route("/api/admin/categories", post(create_category))
        .route(
            "/api/admin/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route("/api/admin/users", get(get_users).post(create_user))
        .route("/api/admin/users/{id}", delete(delete_user))
        .route("/api/admin/contact", get(get_contact_messages))
        .route(
            "/api/admin/contact/{id}/read",
            post(mark_contact_message_read),
        )
        .route(
            "/api/admin/contact/{id}/unread",
            post(mark_contact_message_unread),
        )
        .route(
            "/api/admin/contact/{id}",
            delete(delete_contact_message),
        )
}

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryKind, CreateCategoryDto, UpdateCategoryDto},
        chat::{ChatRequestDto, ChatResponseDto, ChatRole, ChatTurnDto},
        contact::{ContactMessageDto, CreateContactMessageDto, PaginatedContactMessagesDto},
        event::{
            CreateEventDto, EventCountsDto, EventDto, EventPinDto, PaginatedEventsDto,
            UpdateEventDto,
        },
        location::{ContinentDto, CountryDto},
        user::{CreateUserDto, LoginDto, LoginResponseDto, UserDto},
    },
    server::controller::{auth, category, chat, contact, event, location, user},
};

/// OpenAPI documentation for the Sonic Paths API
#[derive(OpenApi)]
#[openapi(
    paths(
        event::get_events,
        event::get_map_pins,
        event::get_event_tags,
        event::get_event_by_id,
        event::submit_event,
        event::get_admin_events,
        event::get_pending_events,
        event::get_event_counts,
        event::update_event,
        event::delete_event,
        event::approve_event,
        event::unapprove_event,
        event::feature_event,
        event::unfeature_event,
        category::get_categories,
        category::get_category_by_id,
        category::create_category,
        category::update_category,
        category::delete_category,
        auth::login,
        auth::get_current_user,
        user::get_users,
        user::create_user,
        user::delete_user,
        contact::submit_contact_message,
        contact::get_contact_messages,
        contact::mark_contact_message_read,
        contact::mark_contact_message_unread,
        contact::delete_contact_message,
        chat::chat,
        location::get_locations,
        location::get_continents,
        location::get_countries,
        location::get_cities,
    ),
    components(schemas(
        ErrorDto,
        EventDto,
        CreateEventDto,
        UpdateEventDto,
        PaginatedEventsDto,
        EventPinDto,
        EventCountsDto,
        CategoryDto,
        CategoryKind,
        CreateCategoryDto,
        UpdateCategoryDto,
        UserDto,
        LoginDto,
        LoginResponseDto,
        CreateUserDto,
        ContactMessageDto,
        CreateContactMessageDto,
        PaginatedContactMessagesDto,
        ChatRequestDto,
        ChatResponseDto,
        ChatTurnDto,
        ChatRole,
        ContinentDto,
        CountryDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "event", description = "Event listing, submission and moderation"),
        (name = "category", description = "Genres, settings and event types"),
        (name = "auth", description = "Admin login"),
        (name = "user", description = "Admin account management"),
        (name = "contact", description = "Contact form and inbox"),
        (name = "chat", description = "Event assistant"),
        (name = "location", description = "Continent, country and city lookup")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by admin endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

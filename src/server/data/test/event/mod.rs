use crate::server::{
    data::event::EventRepository,
    location::LocationSelection,
    model::event::{CreateEventParams, EventFields, EventFilter, EventStatus, UpdateEventParams},
};
use crate::model::category::CategoryKind;
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, fixture};

mod count_by_approval;
mod create;
mod delete;
mod get_approved_tags;
mod get_by_id;
mod get_upcoming_approved;
mod get_with_coordinates;
mod set_flags;
mod update;

/// Valid event fields located in Berlin, starting at the fixture date.
fn fields(title: &str) -> EventFields {
    EventFields {
        title: title.to_string(),
        description: "<p>All night long</p>".to_string(),
        start_date: fixture::event::start_date(),
        end_date: None,
        venue: "Berghain".to_string(),
        address: Some("Am Wriezener Bahnhof".to_string()),
        continent: "Europe".to_string(),
        country: "Germany".to_string(),
        city: Some("Berlin".to_string()),
        latitude: Some(52.511),
        longitude: Some(13.443),
        genre: Some("Techno".to_string()),
        setting: Some("Indoor".to_string()),
        event_type: Some("Club Night".to_string()),
        tags: vec!["klubnacht".to_string(), "berlin".to_string()],
        image_url: None,
        website_url: Some("https://berghain.berlin".to_string()),
        ticket_url: None,
        price: Some("25 €".to_string()),
        organizer_email: None,
    }
}

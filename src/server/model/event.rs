//! Event domain models, filter facets and parameters.
//!
//! `EventFilter` carries the optional facets of the public event search. The repository
//! turns it into a single conjunctive query. Create/update params are validated here,
//! at the DTO boundary, so the service and data layers only ever see well-formed events.

use chrono::{DateTime, Utc};
use std::{collections::HashSet, str::FromStr};

use crate::{
    model::event::{
        CreateEventDto, EventCountsDto, EventDto, EventPinDto, PaginatedEventsDto, UpdateEventDto,
    },
    server::{
        error::AppError,
        location::{validate_location, LocationSelection},
        util::validate,
    },
};

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;

const MAX_TITLE_CHARS: usize = 200;
const MAX_VENUE_CHARS: usize = 200;
const MAX_TAGS: usize = 20;
const MAX_TAG_CHARS: usize = 50;

/// Event with its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub address: Option<String>,
    pub continent: String,
    pub country: String,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub genre: Option<String>,
    pub setting: Option<String>,
    pub event_type: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub organizer_email: Option<String>,
    pub approved: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an event entity and its tag rows at the repository boundary.
    pub fn from_entity(entity: entity::event::Model, tags: Vec<entity::event_tag::Model>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            venue: entity.venue,
            address: entity.address,
            continent: entity.continent,
            country: entity.country,
            city: entity.city,
            latitude: entity.latitude,
            longitude: entity.longitude,
            genre: entity.genre,
            setting: entity.setting,
            event_type: entity.event_type,
            tags: tags.into_iter().map(|t| t.tag).collect(),
            image_url: entity.image_url,
            website_url: entity.website_url,
            ticket_url: entity.ticket_url,
            price: entity.price,
            organizer_email: entity.organizer_email,
            approved: entity.approved,
            featured: entity.featured,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            venue: self.venue,
            address: self.address,
            continent: self.continent,
            country: self.country,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            genre: self.genre,
            setting: self.setting,
            event_type: self.event_type,
            tags: self.tags,
            image_url: self.image_url,
            website_url: self.website_url,
            ticket_url: self.ticket_url,
            price: self.price,
            organizer_email: self.organizer_email,
            approved: self.approved,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Map marker for the event; `None` when it has no coordinates.
    pub fn into_pin(self) -> Option<EventPinDto> {
        let (latitude, longitude) = (self.latitude?, self.longitude?);
        Some(EventPinDto {
            id: self.id,
            title: self.title,
            start_date: self.start_date,
            latitude,
            longitude,
            venue: self.venue,
            city: self.city,
            country: self.country,
            genre: self.genre,
        })
    }
}

/// Approval state facet of the event filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Approved,
    Pending,
    All,
}

impl FromStr for EventStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(Self::Approved),
            "pending" => Ok(Self::Pending),
            "all" => Ok(Self::All),
            other => Err(AppError::BadRequest(format!(
                "Unknown status '{}', expected approved, pending or all",
                other
            ))),
        }
    }
}

/// Optional, conjunctive facets for listing events.
///
/// Empty strings and empty tag lists mean "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilter {
    pub genre: Option<String>,
    pub setting: Option<String>,
    pub event_type: Option<String>,
    /// Matches events carrying at least one of these tags.
    pub tags: Vec<String>,
    /// Case-insensitive substring over title, description, venue and city.
    pub search: Option<String>,
    pub status: EventStatus,
    pub location: LocationSelection,
    /// Only events that have not ended yet.
    pub upcoming: bool,
    pub featured: bool,
    pub page: u64,
    pub per_page: u64,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            genre: None,
            setting: None,
            event_type: None,
            tags: Vec::new(),
            search: None,
            status: EventStatus::Approved,
            location: LocationSelection::default(),
            upcoming: false,
            featured: false,
            page: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl EventFilter {
    /// Trims every facet, normalizes tags and location and clamps the page size.
    pub fn normalized(self) -> Self {
        Self {
            genre: validate::optional_text(self.genre),
            setting: validate::optional_text(self.setting),
            event_type: validate::optional_text(self.event_type),
            tags: normalize_tags(self.tags),
            search: validate::optional_text(self.search),
            location: self.location.normalized(),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
            ..self
        }
    }
}

/// Trims and lowercases tags, dropping blanks and duplicates while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Validated, editable fields of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub address: Option<String>,
    pub continent: String,
    pub country: String,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub genre: Option<String>,
    pub setting: Option<String>,
    pub event_type: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub organizer_email: Option<String>,
}

impl EventFields {
    /// Validates the payload shared by the submission and edit forms.
    ///
    /// Category names are only checked for shape here; their existence is a database
    /// question answered by the service.
    fn validate(dto: EventPayload) -> Result<Self, AppError> {
        let title = validate::text("Title", &dto.title, 1, MAX_TITLE_CHARS)?;
        let description = validate::text("Description", &dto.description, 1, usize::MAX)?;
        let venue = validate::text("Venue", &dto.venue, 1, MAX_VENUE_CHARS)?;

        if let Some(end) = dto.end_date {
            if end < dto.start_date {
                return Err(AppError::BadRequest(
                    "End date must not be before start date".to_string(),
                ));
            }
        }

        let (latitude, longitude) = match (dto.latitude, dto.longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(AppError::BadRequest(
                        "Latitude must be between -90 and 90".to_string(),
                    ));
                }
                if !(-180.0..=180.0).contains(&lng) {
                    return Err(AppError::BadRequest(
                        "Longitude must be between -180 and 180".to_string(),
                    ));
                }
                (Some(lat), Some(lng))
            }
            (None, None) => (None, None),
            _ => {
                return Err(AppError::BadRequest(
                    "Latitude and longitude must be given together".to_string(),
                ))
            }
        };

        let location = validate_location(&dto.continent, &dto.country, dto.city.as_deref())
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let tags = normalize_tags(dto.tags);
        if tags.len() > MAX_TAGS {
            return Err(AppError::BadRequest(format!(
                "At most {} tags are allowed",
                MAX_TAGS
            )));
        }
        if let Some(tag) = tags.iter().find(|t| t.chars().count() > MAX_TAG_CHARS) {
            return Err(AppError::BadRequest(format!(
                "Tag '{}' must be at most {} characters",
                tag, MAX_TAG_CHARS
            )));
        }

        let organizer_email = validate::optional_text(dto.organizer_email)
            .map(|e| validate::email("Organizer email", &e))
            .transpose()?;

        Ok(Self {
            title,
            description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            venue,
            address: validate::optional_text(dto.address),
            continent: location.continent.to_string(),
            country: location.country.to_string(),
            city: location.city.map(str::to_string),
            latitude,
            longitude,
            genre: validate::optional_text(dto.genre),
            setting: validate::optional_text(dto.setting),
            event_type: validate::optional_text(dto.event_type),
            tags,
            image_url: validate::optional_http_url("Image URL", dto.image_url)?,
            website_url: validate::optional_http_url("Website URL", dto.website_url)?,
            ticket_url: validate::optional_http_url("Ticket URL", dto.ticket_url)?,
            price: validate::optional_text(dto.price),
            organizer_email,
        })
    }
}

/// Raw form fields common to both request DTOs.
struct EventPayload {
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    venue: String,
    address: Option<String>,
    continent: String,
    country: String,
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    genre: Option<String>,
    setting: Option<String>,
    event_type: Option<String>,
    tags: Vec<String>,
    image_url: Option<String>,
    website_url: Option<String>,
    ticket_url: Option<String>,
    price: Option<String>,
    organizer_email: Option<String>,
}

/// Parameters for inserting a new event.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEventParams {
    pub fields: EventFields,
    pub approved: bool,
    pub featured: bool,
}

impl CreateEventParams {
    /// Validates a submission. `approved` decides whether it skips the review queue.
    pub fn from_dto(dto: CreateEventDto, approved: bool) -> Result<Self, AppError> {
        let fields = EventFields::validate(EventPayload {
            title: dto.title,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            venue: dto.venue,
            address: dto.address,
            continent: dto.continent,
            country: dto.country,
            city: dto.city,
            latitude: dto.latitude,
            longitude: dto.longitude,
            genre: dto.genre,
            setting: dto.setting,
            event_type: dto.event_type,
            tags: dto.tags,
            image_url: dto.image_url,
            website_url: dto.website_url,
            ticket_url: dto.ticket_url,
            price: dto.price,
            organizer_email: dto.organizer_email,
        })?;

        Ok(Self {
            fields,
            approved,
            featured: false,
        })
    }
}

/// Parameters for replacing an existing event's fields and tags.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEventParams {
    pub id: i32,
    pub fields: EventFields,
    /// `None` keeps the current value.
    pub approved: Option<bool>,
    /// `None` keeps the current value.
    pub featured: Option<bool>,
}

impl UpdateEventParams {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Result<Self, AppError> {
        let fields = EventFields::validate(EventPayload {
            title: dto.title,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            venue: dto.venue,
            address: dto.address,
            continent: dto.continent,
            country: dto.country,
            city: dto.city,
            latitude: dto.latitude,
            longitude: dto.longitude,
            genre: dto.genre,
            setting: dto.setting,
            event_type: dto.event_type,
            tags: dto.tags,
            image_url: dto.image_url,
            website_url: dto.website_url,
            ticket_url: dto.ticket_url,
            price: dto.price,
            organizer_email: dto.organizer_email,
        })?;

        Ok(Self {
            id,
            fields,
            approved: dto.approved,
            featured: dto.featured,
        })
    }
}

/// One page of events with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedEvents {
    pub events: Vec<Event>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedEvents {
    pub fn into_dto(self) -> PaginatedEventsDto {
        PaginatedEventsDto {
            events: self.events.into_iter().map(Event::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCounts {
    pub approved: u64,
    pub pending: u64,
}

impl EventCounts {
    pub fn into_dto(self) -> EventCountsDto {
        EventCountsDto {
            approved: self.approved,
            pending: self.pending,
        }
    }
}

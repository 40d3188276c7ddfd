//! Event factory for creating test event entities.
//!
//! Events are inserted together with their `event_tag` rows. Tags are stored exactly as
//! given, so tests exercising tag normalization should pass lowercase values or go through
//! the repository instead.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db)
///     .title("Fusion")
///     .location("Europe", "Germany", Some("Berlin"))
///     .approved(false)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    venue: String,
    continent: String,
    country: String,
    city: Option<String>,
    coordinates: Option<(f64, f64)>,
    genre: Option<String>,
    setting: Option<String>,
    event_type: Option<String>,
    approved: bool,
    featured: bool,
    tags: Vec<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - description: `"Description for event {id}"`
    /// - start_date: 7 days from now, no end date
    /// - venue: `"Venue {id}"`
    /// - location: Europe / Germany / Berlin, no coordinates
    /// - no genre, setting, event type or tags
    /// - approved: `true`, featured: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: format!("Description for event {}", id),
            start_date: Utc::now() + Duration::days(7),
            end_date: None,
            venue: format!("Venue {}", id),
            continent: "Europe".to_string(),
            country: "Germany".to_string(),
            city: Some("Berlin".to_string()),
            coordinates: None,
            genre: None,
            setting: None,
            event_type: None,
            approved: true,
            featured: false,
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets continent, country and city in one call.
    pub fn location(mut self, continent: &str, country: &str, city: Option<&str>) -> Self {
        self.continent = continent.to_string();
        self.country = country.to_string();
        self.city = city.map(str::to_string);
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn setting(mut self, setting: impl Into<String>) -> Self {
        self.setting = Some(setting.into());
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the event and its tags into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        let event = entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            venue: ActiveValue::Set(self.venue),
            address: ActiveValue::Set(None),
            continent: ActiveValue::Set(self.continent),
            country: ActiveValue::Set(self.country),
            city: ActiveValue::Set(self.city),
            latitude: ActiveValue::Set(self.coordinates.map(|(lat, _)| lat)),
            longitude: ActiveValue::Set(self.coordinates.map(|(_, lng)| lng)),
            genre: ActiveValue::Set(self.genre),
            setting: ActiveValue::Set(self.setting),
            event_type: ActiveValue::Set(self.event_type),
            image_url: ActiveValue::Set(None),
            website_url: ActiveValue::Set(None),
            ticket_url: ActiveValue::Set(None),
            price: ActiveValue::Set(None),
            organizer_email: ActiveValue::Set(None),
            approved: ActiveValue::Set(self.approved),
            featured: ActiveValue::Set(self.featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for tag in self.tags {
            entity::event_tag::ActiveModel {
                id: ActiveValue::NotSet,
                event_id: ActiveValue::Set(event.id),
                tag: ActiveValue::Set(tag),
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an approved upcoming event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
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

/// Request body for submitting or creating an event.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
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
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub organizer_email: Option<String>,
}

/// Request body for the admin edit form.
///
/// Replaces every editable field. `approved` and `featured` are left unchanged when omitted.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
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
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub website_url: Option<String>,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub organizer_email: Option<String>,
    pub approved: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedEventsDto {
    pub events: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Marker shown on the map page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPinDto {
    pub id: i32,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub venue: String,
    pub city: Option<String>,
    pub country: String,
    pub genre: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct EventCountsDto {
    pub approved: u64,
    pub pending: u64,
}

use chrono::{DateTime, TimeZone, Utc};

/// Fixed start date used by the event fixture: 2030-07-15 18:00 UTC.
pub fn start_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 7, 15, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates an in-memory approved event entity located in Berlin.
///
/// # Arguments
/// - `id` - Primary key to assign
/// - `title` - Event title
pub fn entity(id: i32, title: &str) -> entity::event::Model {
    let start = start_date();

    entity::event::Model {
        id,
        title: title.to_string(),
        description: format!("<p>{} description</p>", title),
        start_date: start,
        end_date: None,
        venue: "Tresor".to_string(),
        address: None,
        continent: "Europe".to_string(),
        country: "Germany".to_string(),
        city: Some("Berlin".to_string()),
        latitude: None,
        longitude: None,
        genre: Some("Techno".to_string()),
        setting: Some("Indoor".to_string()),
        event_type: Some("Club Night".to_string()),
        image_url: None,
        website_url: None,
        ticket_url: None,
        price: None,
        organizer_email: None,
        approved: true,
        featured: false,
        created_at: start,
        updated_at: start,
    }
}

//! Renders the event list into the assistant's system prompt.

use std::fmt::Write;

use crate::server::model::event::Event;

const INTRO: &str = "You are the Sonic Paths assistant. Sonic Paths lists music festivals, \
concerts and venues around the world. Answer questions using only the events listed below. \
If nothing matches, say so and suggest browsing the events page. Keep answers short and \
mention dates, places and links when they help.";

/// Builds the system prompt, one compact line per event.
pub fn build_system_prompt(events: &[Event]) -> String {
    let mut prompt = String::from(INTRO);

    if events.is_empty() {
        prompt.push_str("\n\nThere are currently no upcoming events.");
        return prompt;
    }

    prompt.push_str("\n\nUpcoming events:");
    for event in events {
        let _ = write!(
            prompt,
            "\n- [{}] {} | {}",
            event.id,
            event.title,
            event.start_date.format("%Y-%m-%d")
        );
        if let Some(end) = event.end_date {
            let _ = write!(prompt, " to {}", end.format("%Y-%m-%d"));
        }

        let place = [
            Some(event.venue.as_str()),
            event.city.as_deref(),
            Some(event.country.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
        let _ = write!(prompt, " | {}", place);

        let categories = [&event.genre, &event.setting, &event.event_type]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !categories.is_empty() {
            let _ = write!(prompt, " | {}", categories.join(", "));
        }
        if !event.tags.is_empty() {
            let _ = write!(prompt, " | tags: {}", event.tags.join(", "));
        }
        if let Some(price) = &event.price {
            let _ = write!(prompt, " | price: {}", price);
        }
        if let Some(url) = event.website_url.as_ref().or(event.ticket_url.as_ref()) {
            let _ = write!(prompt, " | {}", url);
        }
    }

    prompt
}

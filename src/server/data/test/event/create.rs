use super::*;

/// Tests creating a pending submission with tags.
///
/// Verifies that the event row and one tag row per tag are inserted and that the
/// returned event carries the flags it was created with.
///
/// Expected: Ok with event and tags created
#[tokio::test]
async fn creates_event_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParams {
            fields: fields("Klubnacht"),
            approved: false,
            featured: false,
        })
        .await?;

    assert_eq!(event.title, "Klubnacht");
    assert!(!event.approved);
    assert!(!event.featured);
    assert_eq!(event.tags, vec!["klubnacht".to_string(), "berlin".to_string()]);
    assert_eq!(event.created_at, event.updated_at);

    let tag_count = entity::prelude::EventTag::find()
        .filter(entity::event_tag::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(tag_count, 2);

    Ok(())
}

/// Tests creating an event without any tags.
///
/// Expected: Ok with an empty tag list
#[tokio::test]
async fn creates_event_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut fields = fields("No Tags");
    fields.tags.clear();

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            fields,
            approved: true,
            featured: false,
        })
        .await?;

    assert!(event.approved);
    assert!(event.tags.is_empty());

    Ok(())
}

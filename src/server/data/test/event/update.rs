use super::*;

/// Tests replacing an event's fields and tags.
///
/// Expected: Ok(Some) with new values, old tags removed, flags kept when not given
#[tokio::test]
async fn replaces_fields_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .title("Old Title")
        .featured(true)
        .tags(["old"])
        .build()
        .await?;

    let mut fields = fields("New Title");
    fields.tags = vec!["new".to_string()];

    let updated = EventRepository::new(db)
        .update(UpdateEventParams {
            id: created.id,
            fields,
            approved: None,
            featured: None,
        })
        .await?;

    let updated = updated.expect("event should exist");
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.venue, "Berghain");
    assert_eq!(updated.tags, vec!["new".to_string()]);
    assert!(updated.approved);
    assert!(updated.featured);
    assert_eq!(updated.created_at, created.created_at);

    let old_tags = entity::prelude::EventTag::find()
        .filter(entity::event_tag::Column::Tag.eq("old"))
        .count(db)
        .await?;
    assert_eq!(old_tags, 0);

    Ok(())
}

/// Tests that explicit flags in the update are applied.
///
/// Expected: approved and featured follow the params
#[tokio::test]
async fn applies_explicit_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .approved(false)
        .build()
        .await?;

    let updated = EventRepository::new(db)
        .update(UpdateEventParams {
            id: created.id,
            fields: fields("Approved Now"),
            approved: Some(true),
            featured: Some(true),
        })
        .await?
        .expect("event should exist");

    assert!(updated.approved);
    assert!(updated.featured);

    Ok(())
}

/// Tests updating a nonexistent event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db)
        .update(UpdateEventParams {
            id: 42,
            fields: fields("Ghost"),
            approved: None,
            featured: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

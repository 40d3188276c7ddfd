use super::*;

/// Tests fetching an existing event with its tags.
///
/// Expected: Ok(Some(Event)) with tags in insertion order
#[tokio::test]
async fn returns_event_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .title("Dekmantel")
        .tags(["amsterdam", "open air"])
        .build()
        .await?;

    let event = EventRepository::new(db).get_by_id(created.id).await?;

    let event = event.expect("event should exist");
    assert_eq!(event.title, "Dekmantel");
    assert_eq!(event.tags, vec!["amsterdam".to_string(), "open air".to_string()]);

    Ok(())
}

/// Tests fetching a nonexistent event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventRepository::new(db).get_by_id(999).await?;

    assert!(event.is_none());

    Ok(())
}

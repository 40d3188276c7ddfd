use super::*;

/// Tests deleting an event removes its tags as well.
///
/// Expected: Ok(true) and no rows left
#[tokio::test]
async fn deletes_event_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .tags(["a", "b"])
        .build()
        .await?;

    let deleted = EventRepository::new(db).delete(created.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Event::find_by_id(created.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::EventTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a nonexistent event.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = EventRepository::new(db).delete(123).await?;

    assert!(!deleted);

    Ok(())
}

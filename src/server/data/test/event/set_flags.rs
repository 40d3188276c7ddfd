use super::*;

/// Tests approving and unapproving an event.
///
/// Expected: flag toggles and tags are preserved
#[tokio::test]
async fn toggles_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::EventFactory::new(db)
        .approved(false)
        .tags(["queue"])
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let approved = repo.set_approved(created.id, true).await?.unwrap();
    assert!(approved.approved);
    assert_eq!(approved.tags, vec!["queue".to_string()]);

    let unapproved = repo.set_approved(created.id, false).await?.unwrap();
    assert!(!unapproved.approved);

    Ok(())
}

/// Tests featuring an event.
///
/// Expected: featured flag set
#[tokio::test]
async fn sets_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::event::create_event(db).await?;

    let event = EventRepository::new(db)
        .set_featured(created.id, true)
        .await?
        .unwrap();

    assert!(event.featured);

    Ok(())
}

/// Tests flag changes on a nonexistent event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    assert!(repo.set_approved(7, true).await?.is_none());
    assert!(repo.set_featured(7, true).await?.is_none());

    Ok(())
}

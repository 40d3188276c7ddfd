use super::*;

/// Tests the dashboard counters.
///
/// Expected: approved and pending counted separately
#[tokio::test]
async fn counts_approved_and_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::create_event(db).await?;
    factory::event::create_event(db).await?;
    factory::event::EventFactory::new(db)
        .approved(false)
        .build()
        .await?;

    let counts = EventRepository::new(db).count_by_approval().await?;

    assert_eq!(counts.approved, 2);
    assert_eq!(counts.pending, 1);

    Ok(())
}

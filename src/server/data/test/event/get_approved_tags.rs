use super::*;

/// Tests listing distinct tags of approved events.
///
/// Expected: sorted, deduplicated, pending-only tags excluded
#[tokio::test]
async fn returns_sorted_distinct_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db)
        .tags(["techno", "berlin"])
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .tags(["techno", "ambient"])
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .approved(false)
        .tags(["secret"])
        .build()
        .await?;

    let tags = EventRepository::new(db).get_approved_tags().await?;

    assert_eq!(tags, vec!["ambient", "berlin", "techno"]);

    Ok(())
}

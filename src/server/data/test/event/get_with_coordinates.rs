use super::*;

/// Tests that only approved events with both coordinates become map pins.
///
/// Expected: pending and coordinate-less events are excluded
#[tokio::test]
async fn returns_approved_events_with_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db)
        .title("Pinned")
        .coordinates(52.52, 13.405)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("Pending Pin")
        .coordinates(48.85, 2.35)
        .approved(false)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("No Pin")
        .build()
        .await?;

    let filter = EventFilter {
        status: EventStatus::All,
        ..Default::default()
    };
    let events = EventRepository::new(db)
        .get_with_coordinates(&filter, Utc::now())
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Pinned");
    assert_eq!(events[0].latitude, Some(52.52));

    Ok(())
}

/// Tests that facet filters still apply to map pins.
///
/// Expected: only pins matching the genre are returned
#[tokio::test]
async fn applies_filter_facets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db)
        .title("Jazz Pin")
        .genre("Jazz")
        .coordinates(40.71, -74.0)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("Techno Pin")
        .genre("Techno")
        .coordinates(52.52, 13.405)
        .build()
        .await?;

    let filter = EventFilter {
        genre: Some("Jazz".to_string()),
        ..Default::default()
    };
    let events = EventRepository::new(db)
        .get_with_coordinates(&filter, Utc::now())
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Jazz Pin");

    Ok(())
}

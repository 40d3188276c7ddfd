use super::*;

/// Tests the upcoming approved event feed used for the chat prompt.
///
/// Expected: past and pending events excluded, limit respected
#[tokio::test]
async fn returns_limited_upcoming_approved_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = fixture::event::start_date();

    factory::event::EventFactory::new(db)
        .title("Past")
        .start_date(now - Duration::days(10))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .title("Pending")
        .start_date(now + Duration::days(1))
        .approved(false)
        .build()
        .await?;
    for i in 1..=3 {
        factory::event::EventFactory::new(db)
            .title(format!("Upcoming {}", i))
            .start_date(now + Duration::days(i))
            .build()
            .await?;
    }

    let events = EventRepository::new(db)
        .get_upcoming_approved(now, 2)
        .await?;

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Upcoming 1", "Upcoming 2"]);

    Ok(())
}

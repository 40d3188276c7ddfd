use super::*;

/// Tests marking a message read and unread again.
///
/// Expected: flag follows each call
#[tokio::test]
async fn toggles_read_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_contact_message(db).await?;

    let repo = ContactMessageRepository::new(db);
    assert!(repo.set_read(created.id, true).await?.unwrap().read);
    assert!(!repo.set_read(created.id, false).await?.unwrap().read);

    Ok(())
}

/// Tests marking a nonexistent message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ContactMessageRepository::new(db)
        .set_read(77, true)
        .await?
        .is_none());

    Ok(())
}

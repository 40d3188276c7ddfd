use super::*;

/// Tests deleting a message.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn deletes_message_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_contact_message(db).await?;

    let repo = ContactMessageRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

use super::*;

/// Tests detecting a taken username.
///
/// Expected: true for the existing username, false otherwise
#[tokio::test]
async fn detects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);

    Ok(())
}

use super::*;

/// Tests loading the password hash for login.
///
/// Expected: Ok(Some(UserCredentials)) carrying the stored hash
#[tokio::test]
async fn returns_hash_for_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("night_owl")
        .password_hash("$2b$04$stored")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_username("night_owl")
        .await?
        .expect("user should exist");

    assert_eq!(credentials.user.username, "night_owl");
    assert_eq!(credentials.password_hash, "$2b$04$stored");

    Ok(())
}

/// Tests that username lookups are exact.
///
/// Expected: Ok(None) for an unknown username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_username("nobody")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}

use super::*;

/// Tests listing users alphabetically.
///
/// Expected: Ok with usernames in ascending order
#[tokio::test]
async fn returns_users_sorted_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["zed", "amy", "mo"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let users = UserRepository::new(db).get_all().await?;

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "mo", "zed"]);

    Ok(())
}

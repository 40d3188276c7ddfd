use super::*;
use sea_orm::EntityTrait;

/// Tests creating a category.
///
/// Expected: Ok with stored name and kind
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create(CreateCategoryParams {
            name: "Club Night".to_string(),
            kind: CategoryKind::EventType,
        })
        .await?;

    assert_eq!(category.name, "Club Night");
    assert_eq!(category.kind, CategoryKind::EventType);

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.kind, "event_type");

    Ok(())
}

/// Tests that the same name may exist under different kinds.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_name_in_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    repo.create(CreateCategoryParams {
        name: "Venue".to_string(),
        kind: CategoryKind::EventType,
    })
    .await?;
    let result = repo
        .create(CreateCategoryParams {
            name: "Venue".to_string(),
            kind: CategoryKind::Setting,
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

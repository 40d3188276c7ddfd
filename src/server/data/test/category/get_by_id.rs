use super::*;

/// Tests fetching an existing category.
///
/// Expected: Ok(Some(Category))
#[tokio::test]
async fn returns_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db, "genre", "Ambient").await?;

    let category = CategoryRepository::new(db).get_by_id(created.id).await?;

    let category = category.expect("category should exist");
    assert_eq!(category.name, "Ambient");
    assert_eq!(category.kind, CategoryKind::Genre);

    Ok(())
}

/// Tests fetching a nonexistent category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CategoryRepository::new(db).get_by_id(5).await?.is_none());

    Ok(())
}

/// Tests that a corrupt stored kind surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db, "mood", "Chill").await?;

    let result = CategoryRepository::new(db).get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

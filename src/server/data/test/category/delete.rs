use super::*;

/// Tests deleting a category.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_category_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db, "genre", "Folk").await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

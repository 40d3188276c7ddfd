use super::*;

/// Tests existence checks are scoped to the kind.
///
/// Expected: true for the matching kind only
#[tokio::test]
async fn checks_name_within_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "genre", "Jazz").await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.exists(CategoryKind::Genre, "Jazz").await?);
    assert!(!repo.exists(CategoryKind::Setting, "Jazz").await?);
    assert!(!repo.exists(CategoryKind::Genre, "Blues").await?);

    Ok(())
}

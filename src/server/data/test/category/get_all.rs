use super::*;

/// Tests listing all categories ordered by kind then name.
///
/// Expected: Ok with stored kind order (event_type, genre, setting) and names sorted
#[tokio::test]
async fn returns_categories_ordered_by_kind_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "setting", "Outdoor").await?;
    factory::create_category(db, "genre", "Techno").await?;
    factory::create_category(db, "genre", "Ambient").await?;
    factory::create_category(db, "event_type", "Festival").await?;

    let categories = CategoryRepository::new(db).get_all(None).await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Festival", "Ambient", "Techno", "Outdoor"]);

    Ok(())
}

/// Tests listing categories of a single kind.
///
/// Expected: Ok with only genres
#[tokio::test]
async fn filters_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db, "setting", "Beach").await?;
    factory::create_category(db, "genre", "House").await?;

    let categories = CategoryRepository::new(db)
        .get_all(Some(CategoryKind::Genre))
        .await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "House");

    Ok(())
}

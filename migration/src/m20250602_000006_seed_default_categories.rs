use sea_orm_migration::prelude::*;

use super::m20250601_000002_create_category_table::Category;

/// Genres, settings and event types offered before any admin edits the taxonomy.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "genre",
        &[
            "Electronic",
            "Techno",
            "House",
            "Rock",
            "Jazz",
            "Hip Hop",
            "Classical",
            "World",
            "Folk",
            "Pop",
        ],
    ),
    (
        "setting",
        &["Indoor", "Outdoor", "Beach", "Forest", "Desert", "Urban", "Mountain"],
    ),
    (
        "event_type",
        &["Festival", "Concert", "Club Night", "Venue", "Workshop", "Retreat"],
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Name, Category::Kind])
            .to_owned();

        for (kind, names) in DEFAULT_CATEGORIES {
            for name in names.iter() {
                insert.values_panic([(*name).into(), (*kind).into()]);
            }
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (kind, names) in DEFAULT_CATEGORIES {
            let delete = Query::delete()
                .from_table(Category::Table)
                .and_where(Expr::col(Category::Kind).eq(*kind))
                .and_where(Expr::col(Category::Name).is_in(names.iter().copied()))
                .to_owned();

            manager.exec_stmt(delete).await?;
        }

        Ok(())
    }
}

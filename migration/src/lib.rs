pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_category_table;
mod m20250601_000003_create_event_table;
mod m20250601_000004_create_event_tag_table;
mod m20250601_000005_create_contact_message_table;
mod m20250602_000006_seed_default_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_category_table::Migration),
            Box::new(m20250601_000003_create_event_table::Migration),
            Box::new(m20250601_000004_create_event_tag_table::Migration),
            Box::new(m20250601_000005_create_contact_message_table::Migration),
            Box::new(m20250602_000006_seed_default_categories::Migration),
        ]
    }
}

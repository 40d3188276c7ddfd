//! Category factory for creating test category entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category of the given kind.
///
/// # Arguments
/// - `db` - Database connection
/// - `kind` - Stored kind string (`"genre"`, `"setting"` or `"event_type"`)
/// - `name` - Display name of the category
///
/// # Returns
/// - `Ok(entity::category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_category(
    db: &DatabaseConnection,
    kind: &str,
    name: &str,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

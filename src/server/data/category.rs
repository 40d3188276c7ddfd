use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::category::CategoryKind,
    server::model::category::{Category, CreateCategoryParams},
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Category::from_entity(entity)
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .map(Category::from_entity)
            .transpose()
    }

    /// Gets all categories, optionally of a single kind, ordered by kind then name
    pub async fn get_all(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>, DbErr> {
        let mut query = entity::prelude::Category::find();
        if let Some(kind) = kind {
            query = query.filter(entity::category::Column::Kind.eq(kind.as_str()));
        }

        query
            .order_by_asc(entity::category::Column::Kind)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect()
    }

    /// Checks whether a category with this exact name exists within a kind
    pub async fn exists(&self, kind: CategoryKind, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Kind.eq(kind.as_str()))
            .filter(entity::category::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Renames a category
    ///
    /// Returns `None` when no category has the given ID.
    pub async fn rename(&self, id: i32, name: &str) -> Result<Option<Category>, DbErr> {
        let Some(existing) = entity::prelude::Category::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name.to_string());
        let updated = active.update(self.db).await?;

        Category::from_entity(updated).map(Some)
    }

    /// Deletes a category, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::category::CategoryKind,
    server::{
        data::{category::CategoryRepository, event::EventRepository, is_unique_violation},
        error::AppError,
        model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists categories, optionally of one kind
    pub async fn list(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all(kind).await?)
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a category, rejecting duplicate names within a kind
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.exists(params.kind, &params.name).await? {
            return Err(duplicate(params.kind, &params.name));
        }

        let (kind, name) = (params.kind, params.name.clone());
        let category = repo.create(params).await.map_err(|err| {
            if is_unique_violation(&err) {
                duplicate(kind, &name)
            } else {
                err.into()
            }
        })?;
        tracing::info!("Created {} category '{}'", category.kind, category.name);

        Ok(category)
    }

    /// Renames a category and re-points events using the old name
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let existing = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        if existing.name == params.name {
            return Ok(existing);
        }
        if repo.exists(existing.kind, &params.name).await? {
            return Err(duplicate(existing.kind, &params.name));
        }

        let txn = self.db.begin().await?;
        let renamed = CategoryRepository::new(&txn)
            .rename(params.id, &params.name)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    duplicate(existing.kind, &params.name)
                } else {
                    err.into()
                }
            })?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
        let moved = EventRepository::new(&txn)
            .rename_category(existing.kind, &existing.name, &renamed.name)
            .await?;
        txn.commit().await?;

        tracing::info!(
            "Renamed {} category '{}' to '{}' ({} events updated)",
            renamed.kind,
            existing.name,
            renamed.name,
            moved
        );

        Ok(renamed)
    }

    /// Deletes a category that no event references
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);

        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let in_use = EventRepository::new(self.db)
            .count_by_category(existing.kind, &existing.name)
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Category '{}' is used by {} event(s)",
                existing.name, in_use
            )));
        }

        repo.delete(id).await?;
        tracing::info!("Deleted {} category '{}'", existing.kind, existing.name);

        Ok(())
    }

    /// Checks that a named category of `kind` exists
    pub async fn ensure_exists(&self, kind: CategoryKind, name: &str) -> Result<(), AppError> {
        if CategoryRepository::new(self.db).exists(kind, name).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Unknown {} '{}'",
                kind.as_str().replace('_', " "),
                name
            )))
        }
    }
}

fn duplicate(kind: CategoryKind, name: &str) -> AppError {
    AppError::BadRequest(format!(
        "A {} category named '{}' already exists",
        kind.as_str().replace('_', " "),
        name
    ))
}

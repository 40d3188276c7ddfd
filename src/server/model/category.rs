//! Category domain models and parameters.
//!
//! Categories are the admin-managed vocabularies for the genre, setting and event type
//! facets. Events reference them by name.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::category::{CategoryDto, CategoryKind, CreateCategoryDto, UpdateCategoryDto},
    server::{error::AppError, util::validate},
};

const MAX_NAME_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub kind: CategoryKind,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Category)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored kind is not a known category kind
    pub fn from_entity(entity: entity::category::Model) -> Result<Self, DbErr> {
        let kind = entity
            .kind
            .parse::<CategoryKind>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse category kind: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            kind,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            kind: self.kind,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryParams {
    pub name: String,
    pub kind: CategoryKind,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::text("Name", &dto.name, 1, MAX_NAME_CHARS)?,
            kind: dto.kind,
        })
    }
}

/// Rename of an existing category.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: validate::text("Name", &dto.name, 1, MAX_NAME_CHARS)?,
        })
    }
}

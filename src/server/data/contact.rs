use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::contact::{
    ContactMessage, ContactMessageQuery, CreateContactMessageParams,
};

pub struct ContactMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new, unread message
    pub async fn create(&self, params: CreateContactMessageParams) -> Result<ContactMessage, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }

    /// Gets one page of messages, newest first
    ///
    /// # Returns
    /// - `Ok((messages, total))`: Messages on the page and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        query: ContactMessageQuery,
    ) -> Result<(Vec<ContactMessage>, u64), DbErr> {
        let mut select = entity::prelude::ContactMessage::find();
        if query.unread_only {
            select = select.filter(entity::contact_message::Column::Read.eq(false));
        }

        let paginator = select
            .order_by_desc(entity::contact_message::Column::CreatedAt)
            .order_by_desc(entity::contact_message::Column::Id)
            .paginate(self.db, query.per_page);

        let total = paginator.num_items().await?;
        let messages = paginator
            .fetch_page(query.page)
            .await?
            .into_iter()
            .map(ContactMessage::from_entity)
            .collect();

        Ok((messages, total))
    }

    /// Counts unread messages in the whole inbox
    pub async fn count_unread(&self) -> Result<u64, DbErr> {
        entity::prelude::ContactMessage::find()
            .filter(entity::contact_message::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Sets the read flag, returning `None` when the message does not exist
    pub async fn set_read(&self, id: i32, read: bool) -> Result<Option<ContactMessage>, DbErr> {
        let Some(existing) = entity::prelude::ContactMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::contact_message::ActiveModel = existing.into();
        active.read = ActiveValue::Set(read);
        let updated = active.update(self.db).await?;

        Ok(Some(ContactMessage::from_entity(updated)))
    }

    /// Deletes a message, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactMessage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

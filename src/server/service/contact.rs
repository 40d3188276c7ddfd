use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactMessageRepository,
    error::AppError,
    model::contact::{
        ContactMessage, ContactMessageQuery, CreateContactMessageParams, PaginatedContactMessages,
    },
    util::validate,
};

const MAX_PER_PAGE: u64 = 100;

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a message from the public contact form
    pub async fn submit(
        &self,
        params: CreateContactMessageParams,
    ) -> Result<ContactMessage, AppError> {
        let message = ContactMessageRepository::new(self.db).create(params).await?;
        tracing::info!("Contact message {} received", message.id);

        Ok(message)
    }

    /// Gets one inbox page together with the overall unread count
    pub async fn list(
        &self,
        query: ContactMessageQuery,
    ) -> Result<PaginatedContactMessages, AppError> {
        let query = ContactMessageQuery {
            per_page: query.per_page.clamp(1, MAX_PER_PAGE),
            ..query
        };
        validate::page(query.page, query.per_page)?;
        let repo = ContactMessageRepository::new(self.db);

        let (messages, total) = repo.get_paginated(query).await?;
        let unread = repo.count_unread().await?;

        Ok(PaginatedContactMessages {
            messages,
            total,
            unread,
            page: query.page,
            per_page: query.per_page,
            total_pages: total.div_ceil(query.per_page),
        })
    }

    pub async fn set_read(&self, id: i32, read: bool) -> Result<ContactMessage, AppError> {
        ContactMessageRepository::new(self.db)
            .set_read(id, read)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactMessageRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(())
    }
}

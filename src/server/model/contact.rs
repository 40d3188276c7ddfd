//! Contact message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactMessageDto, CreateContactMessageDto, PaginatedContactMessagesDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactMessageDto {
        ContactMessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactMessageParams {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl CreateContactMessageParams {
    pub fn from_dto(dto: CreateContactMessageDto) -> Result<Self, AppError> {
        let subject = validate::optional_text(dto.subject)
            .map(|s| validate::text("Subject", &s, 1, 200))
            .transpose()?;

        Ok(Self {
            name: validate::text("Name", &dto.name, 1, 100)?,
            email: validate::email("Email", &dto.email)?,
            subject,
            message: validate::text("Message", &dto.message, 1, 5000)?,
        })
    }
}

/// Inbox page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMessageQuery {
    pub page: u64,
    pub per_page: u64,
    pub unread_only: bool,
}

#[derive(Debug, Clone)]
pub struct PaginatedContactMessages {
    pub messages: Vec<ContactMessage>,
    pub total: u64,
    /// Unread messages across the whole inbox, regardless of the page.
    pub unread: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedContactMessages {
    pub fn into_dto(self) -> PaginatedContactMessagesDto {
        PaginatedContactMessagesDto {
            messages: self
                .messages
                .into_iter()
                .map(ContactMessage::into_dto)
                .collect(),
            total: self.total,
            unread: self.unread,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

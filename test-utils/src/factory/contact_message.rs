//! Contact message factory for creating test contact message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contact messages with customizable fields.
pub struct ContactMessageFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> ContactMessageFactory<'a> {
    /// Creates a new ContactMessageFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sender {id}"`
    /// - email: `"sender{id}@example.com"`
    /// - subject: `None`
    /// - message: `"Hello from sender {id}"`
    /// - read: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sender {}", id),
            email: format!("sender{}@example.com", id),
            subject: None,
            message: format!("Hello from sender {}", id),
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the contact message entity into the database.
    pub async fn build(self) -> Result<entity::contact_message::Model, DbErr> {
        entity::contact_message::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set(self.message),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread contact message with default values.
pub async fn create_contact_message(
    db: &DatabaseConnection,
) -> Result<entity::contact_message::Model, DbErr> {
    ContactMessageFactory::new(db).build().await
}

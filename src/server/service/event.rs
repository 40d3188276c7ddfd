//! Event service for business logic.
//!
//! Wraps the event repository with the rules that need more than a single query:
//! category names must exist before an event references them, pending events are hidden
//! from the public, and listing filters are normalized before they reach the database.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::category::CategoryKind,
    server::{
        data::event::EventRepository,
        error::AppError,
        model::event::{
            CreateEventParams, Event, EventCounts, EventFields, EventFilter, PaginatedEvents,
            UpdateEventParams,
        },
        service::category::CategoryService,
        util::validate,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of events matching the filter.
    pub async fn list(&self, filter: EventFilter) -> Result<PaginatedEvents, AppError> {
        let filter = filter.normalized();
        validate::page(filter.page, filter.per_page)?;
        let (events, total) = EventRepository::new(self.db)
            .get_paginated(&filter, Utc::now())
            .await?;

        Ok(PaginatedEvents {
            events,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total.div_ceil(filter.per_page),
        })
    }

    /// Gets an event by ID.
    ///
    /// Pending events are only returned when `include_pending` is set.
    pub async fn get_by_id(&self, id: i32, include_pending: bool) -> Result<Option<Event>, AppError> {
        let event = EventRepository::new(self.db).get_by_id(id).await?;

        Ok(event.filter(|e| e.approved || include_pending))
    }

    /// Stores a public submission in the review queue.
    pub async fn submit(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let params = CreateEventParams {
            approved: false,
            featured: false,
            ..params
        };
        let event = self.insert(params).await?;
        tracing::info!("Event {} '{}' submitted for review", event.id, event.title);

        Ok(event)
    }

    /// Creates an event on behalf of an admin; the params decide its flags.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let event = self.insert(params).await?;
        tracing::info!("Event {} '{}' created by admin", event.id, event.title);

        Ok(event)
    }

    /// Replaces an event's fields and tags.
    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<Event>, AppError> {
        self.ensure_categories(&params.fields).await?;

        let txn = self.db.begin().await?;
        let event = EventRepository::new(&txn).update(params).await?;
        txn.commit().await?;

        Ok(event)
    }

    pub async fn approve(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).set_approved(id, true).await?)
    }

    pub async fn unapprove(&self, id: i32) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).set_approved(id, false).await?)
    }

    pub async fn set_featured(&self, id: i32, featured: bool) -> Result<Option<Event>, AppError> {
        Ok(EventRepository::new(self.db).set_featured(id, featured).await?)
    }

    /// Deletes an event, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let deleted = EventRepository::new(&txn).delete(id).await?;
        txn.commit().await?;
        if deleted {
            tracing::info!("Event {} deleted", id);
        }

        Ok(deleted)
    }

    /// Approved events matching the filter that can be placed on the map.
    pub async fn map_pins(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        let filter = filter.normalized();

        Ok(EventRepository::new(self.db)
            .get_with_coordinates(&filter, Utc::now())
            .await?)
    }

    /// Distinct tags in use by approved events.
    pub async fn tags(&self) -> Result<Vec<String>, AppError> {
        Ok(EventRepository::new(self.db).get_approved_tags().await?)
    }

    pub async fn counts(&self) -> Result<EventCounts, AppError> {
        Ok(EventRepository::new(self.db).count_by_approval().await?)
    }

    async fn insert(&self, params: CreateEventParams) -> Result<Event, AppError> {
        self.ensure_categories(&params.fields).await?;

        let txn = self.db.begin().await?;
        let event = EventRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(event)
    }

    async fn ensure_categories(&self, fields: &EventFields) -> Result<(), AppError> {
        let categories = CategoryService::new(self.db);
        for (kind, name) in [
            (CategoryKind::Genre, &fields.genre),
            (CategoryKind::Setting, &fields.setting),
            (CategoryKind::EventType, &fields.event_type),
        ] {
            if let Some(name) = name {
                categories.ensure_exists(kind, name).await?;
            }
        }

        Ok(())
    }
}

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::{
    model::category::CategoryKind,
    server::model::event::{
        CreateEventParams, Event, EventCounts, EventFields, EventFilter, EventStatus,
        UpdateEventParams,
    },
};

use entity::event::Column;

/// Columns covered by the free-text search.
const SEARCH_COLUMNS: [&str; 4] = ["title", "description", "venue", "city"];

/// Event queries over a connection or an open transaction.
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event together with its tags.
    ///
    /// Issues several statements; callers run it on a transaction.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let now = Utc::now();
        let mut event = fields_into_active_model(params.fields.clone());
        event.approved = ActiveValue::Set(params.approved);
        event.featured = ActiveValue::Set(params.featured);
        event.created_at = ActiveValue::Set(now);
        event.updated_at = ActiveValue::Set(now);

        let event = event.insert(self.db).await?;
        let tags = self.replace_tags(event.id, &params.fields.tags).await?;

        Ok(Event::from_entity(event, tags))
    }

    /// Gets an event by ID with its tags.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let tags = entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.eq(id))
            .order_by_asc(entity::event_tag::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Event::from_entity(event, tags)))
    }

    /// Gets one page of events matching the filter, ordered by start date then ID.
    ///
    /// The filter is expected to be normalized; `now` anchors the `upcoming` facet.
    ///
    /// # Returns
    /// - `Ok((events, total))`: Events on the requested page and the total match count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        filter: &EventFilter,
        now: DateTime<Utc>,
    ) -> Result<(Vec<Event>, u64), DbErr> {
        let paginator = entity::prelude::Event::find()
            .filter(filter_condition(filter, now))
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let events = paginator.fetch_page(filter.page).await?;

        Ok((self.attach_tags(events).await?, total))
    }

    /// Gets every approved event matching the filter that has coordinates.
    ///
    /// Pagination fields of the filter are ignored.
    pub async fn get_with_coordinates(
        &self,
        filter: &EventFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let filter = EventFilter {
            status: EventStatus::Approved,
            ..filter.clone()
        };

        let events = entity::prelude::Event::find()
            .filter(filter_condition(&filter, now))
            .filter(Column::Latitude.is_not_null())
            .filter(Column::Longitude.is_not_null())
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        self.attach_tags(events).await
    }

    /// Gets approved events that have not ended yet, soonest first.
    pub async fn get_upcoming_approved(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Event>, DbErr> {
        let filter = EventFilter {
            upcoming: true,
            ..Default::default()
        };

        let events = entity::prelude::Event::find()
            .filter(filter_condition(&filter, now))
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.attach_tags(events).await
    }

    /// Replaces all editable fields and the tag set of an event.
    ///
    /// Issues several statements; callers run it on a transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Event))`: Updated event
    /// - `Ok(None)`: No event with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(existing) = entity::prelude::Event::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut event = fields_into_active_model(params.fields.clone());
        event.id = ActiveValue::Unchanged(existing.id);
        event.approved = ActiveValue::Set(params.approved.unwrap_or(existing.approved));
        event.featured = ActiveValue::Set(params.featured.unwrap_or(existing.featured));
        event.created_at = ActiveValue::Unchanged(existing.created_at);
        event.updated_at = ActiveValue::Set(Utc::now());

        let event = event.update(self.db).await?;
        let tags = self.replace_tags(event.id, &params.fields.tags).await?;

        Ok(Some(Event::from_entity(event, tags)))
    }

    /// Sets the approval flag.
    pub async fn set_approved(&self, id: i32, approved: bool) -> Result<Option<Event>, DbErr> {
        self.set_flag(id, |event| event.approved = ActiveValue::Set(approved))
            .await
    }

    /// Sets the featured flag.
    pub async fn set_featured(&self, id: i32, featured: bool) -> Result<Option<Event>, DbErr> {
        self.set_flag(id, |event| event.featured = ActiveValue::Set(featured))
            .await
    }

    /// Deletes an event and its tags.
    ///
    /// # Returns
    /// - `Ok(true)`: Event deleted
    /// - `Ok(false)`: No event with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Distinct tags used by approved events, sorted alphabetically.
    pub async fn get_approved_tags(&self) -> Result<Vec<String>, DbErr> {
        let approved_ids = Query::select()
            .column(Column::Id)
            .from(entity::event::Entity)
            .and_where(Column::Approved.eq(true))
            .to_owned();

        entity::prelude::EventTag::find()
            .select_only()
            .column(entity::event_tag::Column::Tag)
            .distinct()
            .filter(entity::event_tag::Column::EventId.in_subquery(approved_ids))
            .order_by_asc(entity::event_tag::Column::Tag)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Counts approved and pending events.
    pub async fn count_by_approval(&self) -> Result<EventCounts, DbErr> {
        let approved = entity::prelude::Event::find()
            .filter(Column::Approved.eq(true))
            .count(self.db)
            .await?;
        let pending = entity::prelude::Event::find()
            .filter(Column::Approved.eq(false))
            .count(self.db)
            .await?;

        Ok(EventCounts { approved, pending })
    }

    /// Counts events referencing a category name.
    pub async fn count_by_category(&self, kind: CategoryKind, name: &str) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(category_column(kind).eq(name))
            .count(self.db)
            .await
    }

    /// Re-points every event using category `from` to `to`.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of events updated
    pub async fn rename_category(
        &self,
        kind: CategoryKind,
        from: &str,
        to: &str,
    ) -> Result<u64, DbErr> {
        let column = category_column(kind);
        let result = entity::prelude::Event::update_many()
            .col_expr(column, Expr::value(to.to_string()))
            .filter(column.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn set_flag<F>(&self, id: i32, apply: F) -> Result<Option<Event>, DbErr>
    where
        F: FnOnce(&mut entity::event::ActiveModel),
    {
        let Some(existing) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut event: entity::event::ActiveModel = existing.into();
        apply(&mut event);
        event.updated_at = ActiveValue::Set(Utc::now());
        event.update(self.db).await?;

        self.get_by_id(id).await
    }

    async fn replace_tags(
        &self,
        event_id: i32,
        tags: &[String],
    ) -> Result<Vec<entity::event_tag::Model>, DbErr> {
        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        let mut inserted = Vec::with_capacity(tags.len());
        for tag in tags {
            let model = entity::event_tag::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                tag: ActiveValue::Set(tag.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            inserted.push(model);
        }

        Ok(inserted)
    }

    /// Loads the tags of all given events in one query.
    async fn attach_tags(&self, events: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
        let mut tags_by_event: HashMap<i32, Vec<entity::event_tag::Model>> = HashMap::new();
        for tag in entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.is_in(ids))
            .order_by_asc(entity::event_tag::Column::Id)
            .all(self.db)
            .await?
        {
            tags_by_event.entry(tag.event_id).or_default().push(tag);
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let tags = tags_by_event.remove(&event.id).unwrap_or_default();
                Event::from_entity(event, tags)
            })
            .collect())
    }
}

/// Builds the conjunctive `WHERE` clause for an event filter.
fn filter_condition(filter: &EventFilter, now: DateTime<Utc>) -> Condition {
    let mut condition = Condition::all()
        .add_option(filter.genre.as_deref().map(|g| Column::Genre.eq(g)))
        .add_option(filter.setting.as_deref().map(|s| Column::Setting.eq(s)))
        .add_option(filter.event_type.as_deref().map(|t| Column::EventType.eq(t)))
        .add_option(filter.location.continent.as_deref().map(|c| Column::Continent.eq(c)))
        .add_option(filter.location.country.as_deref().map(|c| Column::Country.eq(c)))
        .add_option(filter.location.city.as_deref().map(|c| Column::City.eq(c)));

    match filter.status {
        EventStatus::Approved => condition = condition.add(Column::Approved.eq(true)),
        EventStatus::Pending => condition = condition.add(Column::Approved.eq(false)),
        EventStatus::All => {}
    }

    if filter.featured {
        condition = condition.add(Column::Featured.eq(true));
    }

    if filter.upcoming {
        condition = condition.add(
            Condition::any().add(Column::EndDate.gte(now)).add(
                Condition::all()
                    .add(Column::EndDate.is_null())
                    .add(Column::StartDate.gte(now)),
            ),
        );
    }

    if !filter.tags.is_empty() {
        let tagged = Query::select()
            .column(entity::event_tag::Column::EventId)
            .from(entity::event_tag::Entity)
            .and_where(entity::event_tag::Column::Tag.is_in(filter.tags.clone()))
            .to_owned();
        condition = condition.add(Column::Id.in_subquery(tagged));
    }

    if let Some(search) = filter.search.as_deref() {
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        let mut any = Condition::any();
        for column in SEARCH_COLUMNS {
            any = any.add(Expr::cust_with_values(
                format!("LOWER(\"event\".\"{}\") LIKE ? ESCAPE '!'", column),
                [pattern.clone()],
            ));
        }
        condition = condition.add(any);
    }

    condition
}

/// Escapes `LIKE` wildcards using `!` as the escape character.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}

fn category_column(kind: CategoryKind) -> Column {
    match kind {
        CategoryKind::Genre => Column::Genre,
        CategoryKind::Setting => Column::Setting,
        CategoryKind::EventType => Column::EventType,
    }
}

fn fields_into_active_model(fields: EventFields) -> entity::event::ActiveModel {
    entity::event::ActiveModel {
        title: ActiveValue::Set(fields.title),
        description: ActiveValue::Set(fields.description),
        start_date: ActiveValue::Set(fields.start_date),
        end_date: ActiveValue::Set(fields.end_date),
        venue: ActiveValue::Set(fields.venue),
        address: ActiveValue::Set(fields.address),
        continent: ActiveValue::Set(fields.continent),
        country: ActiveValue::Set(fields.country),
        city: ActiveValue::Set(fields.city),
        latitude: ActiveValue::Set(fields.latitude),
        longitude: ActiveValue::Set(fields.longitude),
        genre: ActiveValue::Set(fields.genre),
        setting: ActiveValue::Set(fields.setting),
        event_type: ActiveValue::Set(fields.event_type),
        image_url: ActiveValue::Set(fields.image_url),
        website_url: ActiveValue::Set(fields.website_url),
        ticket_url: ActiveValue::Set(fields.ticket_url),
        price: ActiveValue::Set(fields.price),
        organizer_email: ActiveValue::Set(fields.organizer_email),
        ..Default::default()
    }
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(timestamp_with_time_zone(Event::StartDate))
                    .col(timestamp_with_time_zone_null(Event::EndDate))
                    .col(string(Event::Venue))
                    .col(string_null(Event::Address))
                    .col(string(Event::Continent))
                    .col(string(Event::Country))
                    .col(string_null(Event::City))
                    .col(double_null(Event::Latitude))
                    .col(double_null(Event::Longitude))
                    .col(string_null(Event::Genre))
                    .col(string_null(Event::Setting))
                    .col(string_null(Event::EventType))
                    .col(string_null(Event::ImageUrl))
                    .col(string_null(Event::WebsiteUrl))
                    .col(string_null(Event::TicketUrl))
                    .col(string_null(Event::Price))
                    .col(string_null(Event::OrganizerEmail))
                    .col(boolean(Event::Approved).default(false))
                    .col(boolean(Event::Featured).default(false))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_approved_start_date")
                    .table(Event::Table)
                    .col(Event::Approved)
                    .col(Event::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    StartDate,
    EndDate,
    Venue,
    Address,
    Continent,
    Country,
    City,
    Latitude,
    Longitude,
    Genre,
    Setting,
    EventType,
    ImageUrl,
    WebsiteUrl,
    TicketUrl,
    Price,
    OrganizerEmail,
    Approved,
    Featured,
    CreatedAt,
    UpdatedAt,
}

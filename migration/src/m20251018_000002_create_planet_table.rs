use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_uniq(Planet::Name))
                    .col(string(Planet::DistanceFromEarth))
                    .col(string(Planet::NearestStar))
                    .col(string(Planet::Image))
                    .col(timestamp(Planet::CreatedAt))
                    .col(timestamp(Planet::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    #[sea_orm(iden = "planets")]
    Table,
    Id,
    Name,
    DistanceFromEarth,
    NearestStar,
    Image,
    CreatedAt,
    UpdatedAt,
}

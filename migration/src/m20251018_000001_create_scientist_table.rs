use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scientist::Table)
                    .if_not_exists()
                    .col(pk_auto(Scientist::Id))
                    .col(string_uniq(Scientist::Name))
                    .col(string(Scientist::FieldOfStudy))
                    .col(string(Scientist::Avatar))
                    .col(timestamp(Scientist::CreatedAt))
                    .col(timestamp(Scientist::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scientist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scientist {
    #[sea_orm(iden = "scientists")]
    Table,
    Id,
    Name,
    FieldOfStudy,
    Avatar,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Distributor::Table)
                    .if_not_exists()
                    .col(pk_auto(Distributor::Id))
                    .col(string_uniq(Distributor::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Distributor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Distributor {
    #[sea_orm(iden = "distributors")]
    Table,
    Id,
    Name,
}

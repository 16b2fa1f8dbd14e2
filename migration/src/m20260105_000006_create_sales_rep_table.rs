use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesRep::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesRep::Id))
                    .col(integer_uniq(SalesRep::UserId))
                    .col(string(SalesRep::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_rep_user_id")
                            .from(SalesRep::Table, SalesRep::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesRep::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SalesRep {
    #[sea_orm(iden = "sales_reps")]
    Table,
    Id,
    UserId,
    Name,
}

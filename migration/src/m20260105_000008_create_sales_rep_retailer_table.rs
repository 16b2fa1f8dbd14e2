use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000006_create_sales_rep_table::SalesRep,
    m20260105_000007_create_retailer_table::Retailer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesRepRetailer::Table)
                    .if_not_exists()
                    .col(integer(SalesRepRetailer::SalesRepId))
                    .col(integer(SalesRepRetailer::RetailerId))
                    .col(
                        timestamp_with_time_zone(SalesRepRetailer::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SalesRepRetailer::SalesRepId)
                            .col(SalesRepRetailer::RetailerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_rep_retailer_sales_rep_id")
                            .from(SalesRepRetailer::Table, SalesRepRetailer::SalesRepId)
                            .to(SalesRep::Table, SalesRep::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_rep_retailer_retailer_id")
                            .from(SalesRepRetailer::Table, SalesRepRetailer::RetailerId)
                            .to(Retailer::Table, Retailer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by retailer when collecting the reps to invalidate
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_rep_retailer_retailer_id")
                    .table(SalesRepRetailer::Table)
                    .col(SalesRepRetailer::RetailerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesRepRetailer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SalesRepRetailer {
    #[sea_orm(iden = "sales_rep_retailers")]
    Table,
    SalesRepId,
    RetailerId,
    AssignedAt,
}

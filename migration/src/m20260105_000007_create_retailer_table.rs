use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_region_table::Region, m20260105_000003_create_area_table::Area,
    m20260105_000004_create_territory_table::Territory,
    m20260105_000005_create_distributor_table::Distributor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Retailer::Table)
                    .if_not_exists()
                    .col(pk_auto(Retailer::Id))
                    .col(string(Retailer::Name))
                    .col(string_null(Retailer::Phone).unique_key())
                    .col(integer(Retailer::RegionId))
                    .col(integer(Retailer::AreaId))
                    .col(integer(Retailer::DistributorId))
                    .col(integer_null(Retailer::TerritoryId))
                    .col(integer(Retailer::Points).default(0))
                    .col(text(Retailer::Routes).default(""))
                    .col(text(Retailer::Notes).default(""))
                    .col(
                        timestamp_with_time_zone(Retailer::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_retailer_region_id")
                            .from(Retailer::Table, Retailer::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_retailer_area_id")
                            .from(Retailer::Table, Retailer::AreaId)
                            .to(Area::Table, Area::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_retailer_distributor_id")
                            .from(Retailer::Table, Retailer::DistributorId)
                            .to(Distributor::Table, Distributor::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_retailer_territory_id")
                            .from(Retailer::Table, Retailer::TerritoryId)
                            .to(Territory::Table, Territory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_retailer_name")
                    .table(Retailer::Table)
                    .col(Retailer::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_retailer_region_area")
                    .table(Retailer::Table)
                    .col(Retailer::RegionId)
                    .col(Retailer::AreaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Retailer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Retailer {
    #[sea_orm(iden = "retailers")]
    Table,
    Id,
    Name,
    Phone,
    RegionId,
    AreaId,
    DistributorId,
    TerritoryId,
    Points,
    Routes,
    Notes,
    UpdatedAt,
}

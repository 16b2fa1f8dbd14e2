use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_region_table::Region;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Area::Table)
                    .if_not_exists()
                    .col(pk_auto(Area::Id))
                    .col(string(Area::Name))
                    .col(integer(Area::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_area_region_id")
                            .from(Area::Table, Area::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Area names are unique within their region
        manager
            .create_index(
                Index::create()
                    .name("idx_area_region_name_unique")
                    .table(Area::Table)
                    .col(Area::RegionId)
                    .col(Area::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Area::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Area {
    #[sea_orm(iden = "areas")]
    Table,
    Id,
    Name,
    RegionId,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_area_table::Area;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Territory::Table)
                    .if_not_exists()
                    .col(pk_auto(Territory::Id))
                    .col(string(Territory::Name))
                    .col(integer(Territory::AreaId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_territory_area_id")
                            .from(Territory::Table, Territory::AreaId)
                            .to(Area::Table, Area::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_territory_area_name_unique")
                    .table(Territory::Table)
                    .col(Territory::AreaId)
                    .col(Territory::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Territory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Territory {
    #[sea_orm(iden = "territories")]
    Table,
    Id,
    Name,
    AreaId,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "retailers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    pub region_id: i32,
    pub area_id: i32,
    pub distributor_id: i32,
    pub territory_id: Option<i32>,
    pub points: i32,
    #[sea_orm(column_type = "Text")]
    pub routes: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::area::Entity",
        from = "Column::AreaId",
        to = "super::area::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Area,
    #[sea_orm(
        belongs_to = "super::distributor::Entity",
        from = "Column::DistributorId",
        to = "super::distributor::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Distributor,
    #[sea_orm(
        belongs_to = "super::territory::Entity",
        from = "Column::TerritoryId",
        to = "super::territory::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Territory,
    #[sea_orm(has_many = "super::sales_rep_retailer::Entity")]
    SalesRepRetailer,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Area.def()
    }
}

impl Related<super::distributor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distributor.def()
    }
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territory.def()
    }
}

impl Related<super::sales_rep_retailer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesRepRetailer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

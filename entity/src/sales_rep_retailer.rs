use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sales_rep_retailers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sales_rep_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub retailer_id: i32,
    pub assigned_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sales_rep::Entity",
        from = "Column::SalesRepId",
        to = "super::sales_rep::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SalesRep,
    #[sea_orm(
        belongs_to = "super::retailer::Entity",
        from = "Column::RetailerId",
        to = "super::retailer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Retailer,
}

impl Related<super::sales_rep::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesRep.def()
    }
}

impl Related<super::retailer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Retailer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password_hash: String,
    /// `Admin` or `SalesRep`
    pub role: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::sales_rep::Entity")]
    SalesRep,
}

impl Related<super::sales_rep::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesRep.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

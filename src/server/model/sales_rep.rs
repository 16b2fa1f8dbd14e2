//! Sales rep profile domain model.

use crate::{
    model::user::{PaginatedSalesRepsDto, SalesRepDto},
    server::model::pagination::Page,
};

/// A sales rep profile joined with its user's email.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRep {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl SalesRep {
    pub fn from_entity(entity: entity::sales_rep::Model, email: String) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email,
        }
    }

    pub fn into_dto(self) -> SalesRepDto {
        SalesRepDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
        }
    }
}

impl Page<SalesRep> {
    pub fn into_dto(self) -> PaginatedSalesRepsDto {
        let meta = self.meta_dto();
        PaginatedSalesRepsDto {
            data: self.items.into_iter().map(SalesRep::into_dto).collect(),
            meta,
        }
    }
}

//! Sales rep profile repository.
//!
//! Profiles are created, renamed and removed together with their user by `UserRepository`;
//! this repository covers the read side.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::lower_like,
    model::{
        pagination::{like_pattern, Page},
        sales_rep::SalesRep,
        user::UserFilter,
    },
};

pub struct SalesRepRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalesRepRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of sales reps with their user emails, ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Page request and optional search on name or email
    ///
    /// # Returns
    /// - `Ok(Page<SalesRep>)` - Requested page with total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, filter: &UserFilter) -> Result<Page<SalesRep>, DbErr> {
        let mut query = entity::prelude::SalesRep::find().find_also_related(entity::prelude::User);
        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(lower_like("sales_reps", "name", &pattern))
                    .add(lower_like("users", "email", &pattern)),
            );
        }

        let paginator = query
            .order_by_asc(entity::sales_rep::Column::Name)
            .order_by_asc(entity::sales_rep::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page.index()).await?;

        Ok(Page::new(
            rows.into_iter().map(into_sales_rep).collect(),
            total,
            filter.page,
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SalesRep>, DbErr> {
        let row = entity::prelude::SalesRep::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(into_sales_rep))
    }

    /// Gets the sales rep profile owned by a user.
    ///
    /// # Returns
    /// - `Ok(Some(SalesRep))` - The user's profile
    /// - `Ok(None)` - The user has no profile (admins, or unknown user)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<SalesRep>, DbErr> {
        let row = entity::prelude::SalesRep::find()
            .filter(entity::sales_rep::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(into_sales_rep))
    }
}

fn into_sales_rep(
    (sales_rep, user): (entity::sales_rep::Model, Option<entity::user::Model>),
) -> SalesRep {
    let email = user.map(|u| u.email).unwrap_or_default();
    SalesRep::from_entity(sales_rep, email)
}

//! Distributor data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{lower_eq, lower_like},
    model::{
        pagination::{like_pattern, Page},
        taxonomy::{Distributor, DistributorParams, TaxonomyFilter},
    },
};

pub struct DistributorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DistributorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of distributors ordered by name, optionally filtered by a name substring.
    pub async fn get_paginated(
        &self,
        filter: &TaxonomyFilter,
    ) -> Result<Page<Distributor>, DbErr> {
        let mut query = entity::prelude::Distributor::find();
        if let Some(search) = &filter.search {
            query = query.filter(lower_like("distributors", "name", &like_pattern(search)));
        }

        let paginator = query
            .order_by_asc(entity::distributor::Column::Name)
            .order_by_asc(entity::distributor::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let distributors = paginator.fetch_page(filter.page.index()).await?;

        Ok(Page::new(
            distributors
                .into_iter()
                .map(Distributor::from_entity)
                .collect(),
            total,
            filter.page,
        ))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::distributor::Model>, DbErr> {
        entity::prelude::Distributor::find()
            .order_by_asc(entity::distributor::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Distributor>, DbErr> {
        let entity = entity::prelude::Distributor::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Distributor::from_entity))
    }

    /// Checks whether another distributor already uses the name, ignoring case.
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Distributor::find().filter(lower_eq("distributors", "name", name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::distributor::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: DistributorParams) -> Result<Distributor, DbErr> {
        let entity = entity::distributor::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Distributor::from_entity(entity))
    }

    /// Renames a distributor, `Ok(None)` when it does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: DistributorParams,
    ) -> Result<Option<Distributor>, DbErr> {
        let Some(entity) = entity::prelude::Distributor::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(params.name);
        let entity = active.update(self.db).await?;

        Ok(Some(Distributor::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Distributor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

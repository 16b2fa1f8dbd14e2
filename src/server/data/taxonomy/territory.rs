//! Territory data repository.
//!
//! Territories are loaded together with their area; names are unique per area.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{lower_eq, lower_like},
    model::{
        pagination::{like_pattern, Page},
        taxonomy::{TaxonomyFilter, Territory, TerritoryParams},
    },
};

pub struct TerritoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TerritoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of territories with their area names, optionally filtered by `area_id`.
    pub async fn get_paginated(&self, filter: &TaxonomyFilter) -> Result<Page<Territory>, DbErr> {
        let mut query = entity::prelude::Territory::find().find_also_related(entity::prelude::Area);
        if let Some(search) = &filter.search {
            query = query.filter(lower_like("territories", "name", &like_pattern(search)));
        }
        if let Some(area_id) = filter.area_id {
            query = query.filter(entity::territory::Column::AreaId.eq(area_id));
        }

        let paginator = query
            .order_by_asc(entity::territory::Column::Name)
            .order_by_asc(entity::territory::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page.index()).await?;

        Ok(Page::new(
            rows.into_iter().map(into_territory).collect(),
            total,
            filter.page,
        ))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::territory::Model>, DbErr> {
        entity::prelude::Territory::find()
            .order_by_asc(entity::territory::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Territory>, DbErr> {
        let row = entity::prelude::Territory::find_by_id(id)
            .find_also_related(entity::prelude::Area)
            .one(self.db)
            .await?;

        Ok(row.map(into_territory))
    }

    /// Checks whether another territory of the same area already uses the name, ignoring case.
    pub async fn name_taken(
        &self,
        name: &str,
        area_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Territory::find()
            .filter(entity::territory::Column::AreaId.eq(area_id))
            .filter(lower_eq("territories", "name", name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::territory::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_by_area(&self, area_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Territory::find()
            .filter(entity::territory::Column::AreaId.eq(area_id))
            .count(self.db)
            .await
    }

    pub async fn create(&self, params: TerritoryParams) -> Result<Territory, DbErr> {
        let entity = entity::territory::ActiveModel {
            name: ActiveValue::Set(params.name),
            area_id: ActiveValue::Set(params.area_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Territory with id {} not found after creation",
                entity.id
            )))
    }

    /// Updates a territory's name and area, `Ok(None)` when it does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: TerritoryParams,
    ) -> Result<Option<Territory>, DbErr> {
        let Some(entity) = entity::prelude::Territory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.area_id = ActiveValue::Set(params.area_id);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Territory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_territory(
    (territory, area): (entity::territory::Model, Option<entity::area::Model>),
) -> Territory {
    let area_name = area.map(|a| a.name).unwrap_or_default();
    Territory::from_entity(territory, area_name)
}

//! Area data repository.
//!
//! Areas are always loaded together with their region so the domain model can carry the
//! region name. Names are unique per region, not globally.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{lower_eq, lower_like},
    model::{
        pagination::{like_pattern, Page},
        taxonomy::{Area, AreaParams, TaxonomyFilter},
    },
};

pub struct AreaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AreaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of areas with their region names.
    ///
    /// # Arguments
    /// - `filter` - Page request, optional name search and optional `region_id`
    ///
    /// # Returns
    /// - `Ok(Page<Area>)` - Requested page ordered by area name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, filter: &TaxonomyFilter) -> Result<Page<Area>, DbErr> {
        let mut query = entity::prelude::Area::find().find_also_related(entity::prelude::Region);
        if let Some(search) = &filter.search {
            query = query.filter(lower_like("areas", "name", &like_pattern(search)));
        }
        if let Some(region_id) = filter.region_id {
            query = query.filter(entity::area::Column::RegionId.eq(region_id));
        }

        let paginator = query
            .order_by_asc(entity::area::Column::Name)
            .order_by_asc(entity::area::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page.index()).await?;

        Ok(Page::new(
            rows.into_iter().map(into_area).collect(),
            total,
            filter.page,
        ))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::area::Model>, DbErr> {
        entity::prelude::Area::find()
            .order_by_asc(entity::area::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Area>, DbErr> {
        let row = entity::prelude::Area::find_by_id(id)
            .find_also_related(entity::prelude::Region)
            .one(self.db)
            .await?;

        Ok(row.map(into_area))
    }

    /// Checks whether another area of the same region already uses the name, ignoring case.
    pub async fn name_taken(
        &self,
        name: &str,
        region_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Area::find()
            .filter(entity::area::Column::RegionId.eq(region_id))
            .filter(lower_eq("areas", "name", name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::area::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts the areas belonging to a region.
    pub async fn count_by_region(&self, region_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Area::find()
            .filter(entity::area::Column::RegionId.eq(region_id))
            .count(self.db)
            .await
    }

    pub async fn create(&self, params: AreaParams) -> Result<Area, DbErr> {
        let entity = entity::area::ActiveModel {
            name: ActiveValue::Set(params.name),
            region_id: ActiveValue::Set(params.region_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Area with id {} not found after creation",
                entity.id
            )))
    }

    /// Updates an area's name and region.
    ///
    /// # Returns
    /// - `Ok(Some(Area))` - The updated area with its (possibly new) region name
    /// - `Ok(None)` - No area with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: AreaParams) -> Result<Option<Area>, DbErr> {
        let Some(entity) = entity::prelude::Area::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(params.name);
        active.region_id = ActiveValue::Set(params.region_id);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Area::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

fn into_area((area, region): (entity::area::Model, Option<entity::region::Model>)) -> Area {
    let region_name = region.map(|r| r.name).unwrap_or_default();
    Area::from_entity(area, region_name)
}

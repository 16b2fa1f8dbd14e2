//! Region data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{lower_eq, lower_like},
    model::{
        pagination::{like_pattern, Page},
        taxonomy::{Region, RegionParams, TaxonomyFilter},
    },
};

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of regions ordered by name, optionally filtered by a name substring.
    ///
    /// # Arguments
    /// - `filter` - Page request and optional search term
    ///
    /// # Returns
    /// - `Ok(Page<Region>)` - Requested page with total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, filter: &TaxonomyFilter) -> Result<Page<Region>, DbErr> {
        let mut query = entity::prelude::Region::find();
        if let Some(search) = &filter.search {
            query = query.filter(lower_like("regions", "name", &like_pattern(search)));
        }

        let paginator = query
            .order_by_asc(entity::region::Column::Name)
            .order_by_asc(entity::region::Column::Id)
            .paginate(self.db, filter.page.limit);

        let total = paginator.num_items().await?;
        let regions = paginator.fetch_page(filter.page.index()).await?;

        Ok(Page::new(
            regions.into_iter().map(Region::from_entity).collect(),
            total,
            filter.page,
        ))
    }

    /// Gets every region, used to build name lookups for imports.
    pub async fn get_all(&self) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Region>, DbErr> {
        let entity = entity::prelude::Region::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Region::from_entity))
    }

    /// Checks whether another region already uses the name, ignoring case.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `exclude_id` - Region being renamed, skipped in the check
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Region::find().filter(lower_eq("regions", "name", name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::region::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: RegionParams) -> Result<Region, DbErr> {
        let entity = entity::region::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Region::from_entity(entity))
    }

    /// Renames a region.
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - The updated region
    /// - `Ok(None)` - No region with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: RegionParams) -> Result<Option<Region>, DbErr> {
        let Some(entity) = entity::prelude::Region::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(params.name);
        let entity = active.update(self.db).await?;

        Ok(Some(Region::from_entity(entity)))
    }

    /// Deletes a region, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Region::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{
        retailer::RetailerRepository,
        taxonomy::{area::AreaRepository, region::RegionRepository},
    },
    error::AppError,
    model::{
        pagination::Page,
        taxonomy::{Region, RegionParams, TaxonomyFilter},
    },
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    pub async fn get_paginated(&self, filter: TaxonomyFilter) -> Result<Page<Region>, AppError> {
        Ok(RegionRepository::new(self.db).get_paginated(&filter).await?)
    }

    /// Creates a region.
    ///
    /// # Returns
    /// - `Ok(Region)` - The created region
    /// - `Err(AppError::BadRequest)` - A region with that name already exists
    pub async fn create(&self, params: RegionParams) -> Result<Region, AppError> {
        let repo = RegionRepository::new(self.db);

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))
    }

    /// Renames a region.
    ///
    /// # Returns
    /// - `Ok(Region)` - The renamed region
    /// - `Err(AppError::NotFound)` - No region with that ID
    /// - `Err(AppError::BadRequest)` - Another region already uses the name
    pub async fn update(&self, id: i32, params: RegionParams) -> Result<Region, AppError> {
        let repo = RegionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, Some(id)).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        let region = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))?
            .ok_or_else(|| not_found(id))?;

        self.cache.invalidate_all_listings().await;

        Ok(region)
    }

    /// Deletes a region that has no areas and no retailers.
    ///
    /// # Returns
    /// - `Ok(())` - Region deleted
    /// - `Err(AppError::NotFound)` - No region with that ID
    /// - `Err(AppError::BadRequest)` - Region is still referenced
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RegionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let areas = AreaRepository::new(self.db).count_by_region(id).await?;
        if areas > 0 {
            return Err(AppError::BadRequest(format!(
                "Region is still referenced by {} area(s)",
                areas
            )));
        }

        let retailers = RetailerRepository::new(self.db)
            .count_referencing(entity::retailer::Column::RegionId, id)
            .await?;
        if retailers > 0 {
            return Err(AppError::BadRequest(format!(
                "Region is still referenced by {} retailer(s)",
                retailers
            )));
        }

        repo.delete(id).await?;
        self.cache.invalidate_all_listings().await;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Region {} not found", id))
}

fn duplicate_name(name: &str) -> String {
    format!("Region '{}' already exists", name)
}

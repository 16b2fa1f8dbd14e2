use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{
        retailer::RetailerRepository,
        taxonomy::{area::AreaRepository, region::RegionRepository, territory::TerritoryRepository},
    },
    error::AppError,
    model::{
        pagination::Page,
        taxonomy::{Area, AreaParams, TaxonomyFilter},
    },
};

pub struct AreaService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> AreaService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    pub async fn get_paginated(&self, filter: TaxonomyFilter) -> Result<Page<Area>, AppError> {
        Ok(AreaRepository::new(self.db).get_paginated(&filter).await?)
    }

    /// Creates an area inside an existing region.
    ///
    /// # Returns
    /// - `Ok(Area)` - The created area
    /// - `Err(AppError::BadRequest)` - Unknown region or name already used in that region
    pub async fn create(&self, params: AreaParams) -> Result<Area, AppError> {
        self.ensure_region_exists(params.region_id).await?;

        let repo = AreaRepository::new(self.db);
        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, params.region_id, None).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))
    }

    /// Renames an area and/or moves it to another region.
    ///
    /// Moving is refused while retailers reference the area, since their region would no
    /// longer contain their area.
    ///
    /// # Returns
    /// - `Ok(Area)` - The updated area
    /// - `Err(AppError::NotFound)` - No area with that ID
    /// - `Err(AppError::BadRequest)` - Unknown region, duplicate name or blocked move
    pub async fn update(&self, id: i32, params: AreaParams) -> Result<Area, AppError> {
        let repo = AreaRepository::new(self.db);

        let current = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if current.region_id != params.region_id {
            self.ensure_region_exists(params.region_id).await?;

            let retailers = RetailerRepository::new(self.db)
                .count_referencing(entity::retailer::Column::AreaId, id)
                .await?;
            if retailers > 0 {
                return Err(AppError::BadRequest(format!(
                    "Area cannot move to another region while {} retailer(s) reference it",
                    retailers
                )));
            }
        }

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, params.region_id, Some(id)).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        let area = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))?
            .ok_or_else(|| not_found(id))?;

        self.cache.invalidate_all_listings().await;

        Ok(area)
    }

    /// Deletes an area that has no territories and no retailers.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AreaRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let territories = TerritoryRepository::new(self.db).count_by_area(id).await?;
        if territories > 0 {
            return Err(AppError::BadRequest(format!(
                "Area is still referenced by {} territory(ies)",
                territories
            )));
        }

        let retailers = RetailerRepository::new(self.db)
            .count_referencing(entity::retailer::Column::AreaId, id)
            .await?;
        if retailers > 0 {
            return Err(AppError::BadRequest(format!(
                "Area is still referenced by {} retailer(s)",
                retailers
            )));
        }

        repo.delete(id).await?;
        self.cache.invalidate_all_listings().await;

        Ok(())
    }

    async fn ensure_region_exists(&self, region_id: i32) -> Result<(), AppError> {
        if RegionRepository::new(self.db)
            .find_by_id(region_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Region {} does not exist",
                region_id
            )));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Area {} not found", id))
}

fn duplicate_name(name: &str) -> String {
    format!("Area '{}' already exists in this region", name)
}

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{
        retailer::RetailerRepository,
        taxonomy::{area::AreaRepository, territory::TerritoryRepository},
    },
    error::AppError,
    model::{
        pagination::Page,
        taxonomy::{TaxonomyFilter, Territory, TerritoryParams},
    },
};

pub struct TerritoryService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> TerritoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    pub async fn get_paginated(
        &self,
        filter: TaxonomyFilter,
    ) -> Result<Page<Territory>, AppError> {
        Ok(TerritoryRepository::new(self.db)
            .get_paginated(&filter)
            .await?)
    }

    /// Creates a territory inside an existing area.
    pub async fn create(&self, params: TerritoryParams) -> Result<Territory, AppError> {
        self.ensure_area_exists(params.area_id).await?;

        let repo = TerritoryRepository::new(self.db);
        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, params.area_id, None).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))
    }

    /// Renames a territory and/or moves it to another area.
    ///
    /// Moving is refused while retailers reference the territory.
    pub async fn update(&self, id: i32, params: TerritoryParams) -> Result<Territory, AppError> {
        let repo = TerritoryRepository::new(self.db);

        let current = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if current.area_id != params.area_id {
            self.ensure_area_exists(params.area_id).await?;

            let retailers = RetailerRepository::new(self.db)
                .count_referencing(entity::retailer::Column::TerritoryId, id)
                .await?;
            if retailers > 0 {
                return Err(AppError::BadRequest(format!(
                    "Territory cannot move to another area while {} retailer(s) reference it",
                    retailers
                )));
            }
        }

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, params.area_id, Some(id)).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        let territory = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))?
            .ok_or_else(|| not_found(id))?;

        self.cache.invalidate_all_listings().await;

        Ok(territory)
    }

    /// Deletes a territory no retailer references.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TerritoryRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let retailers = RetailerRepository::new(self.db)
            .count_referencing(entity::retailer::Column::TerritoryId, id)
            .await?;
        if retailers > 0 {
            return Err(AppError::BadRequest(format!(
                "Territory is still referenced by {} retailer(s)",
                retailers
            )));
        }

        repo.delete(id).await?;
        self.cache.invalidate_all_listings().await;

        Ok(())
    }

    async fn ensure_area_exists(&self, area_id: i32) -> Result<(), AppError> {
        if AreaRepository::new(self.db)
            .find_by_id(area_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Area {} does not exist",
                area_id
            )));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Territory {} not found", id))
}

fn duplicate_name(name: &str) -> String {
    format!("Territory '{}' already exists in this area", name)
}

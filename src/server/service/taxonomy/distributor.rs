use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{retailer::RetailerRepository, taxonomy::distributor::DistributorRepository},
    error::AppError,
    model::{
        pagination::Page,
        taxonomy::{Distributor, DistributorParams, TaxonomyFilter},
    },
};

pub struct DistributorService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> DistributorService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    pub async fn get_paginated(
        &self,
        filter: TaxonomyFilter,
    ) -> Result<Page<Distributor>, AppError> {
        Ok(DistributorRepository::new(self.db)
            .get_paginated(&filter)
            .await?)
    }

    /// Creates a distributor, rejecting duplicate names with 400.
    pub async fn create(&self, params: DistributorParams) -> Result<Distributor, AppError> {
        let repo = DistributorRepository::new(self.db);

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))
    }

    /// Renames a distributor; 404 when unknown, 400 when the name is taken.
    pub async fn update(
        &self,
        id: i32,
        params: DistributorParams,
    ) -> Result<Distributor, AppError> {
        let repo = DistributorRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let duplicate = duplicate_name(&params.name);
        if repo.name_taken(&params.name, Some(id)).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        let distributor = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate))?
            .ok_or_else(|| not_found(id))?;

        self.cache.invalidate_all_listings().await;

        Ok(distributor)
    }

    /// Deletes a distributor no retailer references.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = DistributorRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let retailers = RetailerRepository::new(self.db)
            .count_referencing(entity::retailer::Column::DistributorId, id)
            .await?;
        if retailers > 0 {
            return Err(AppError::BadRequest(format!(
                "Distributor is still referenced by {} retailer(s)",
                retailers
            )));
        }

        repo.delete(id).await?;
        self.cache.invalidate_all_listings().await;

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Distributor {} not found", id))
}

fn duplicate_name(name: &str) -> String {
    format!("Distributor '{}' already exists", name)
}

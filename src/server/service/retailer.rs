//! Admin retailer management.
//!
//! Every write checks that the referenced taxonomy rows exist and nest correctly (area inside
//! region, territory inside area) and that the phone number is unique. Updates and deletes
//! drop the cached pages of every sales rep the retailer is assigned to.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{
        assignment::AssignmentRepository,
        retailer::RetailerRepository,
        taxonomy::{
            area::AreaRepository, distributor::DistributorRepository, region::RegionRepository,
            territory::TerritoryRepository,
        },
    },
    error::AppError,
    model::{
        pagination::Page,
        retailer::{Retailer, RetailerParams, RetailerQuery, UpdateRetailerParams},
    },
};

pub struct RetailerService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> RetailerService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    /// Gets a page of all retailers matching the query, uncached.
    pub async fn get_paginated(&self, query: RetailerQuery) -> Result<Page<Retailer>, AppError> {
        Ok(RetailerRepository::new(self.db)
            .get_paginated(&query, None)
            .await?)
    }

    /// Gets a retailer by ID.
    ///
    /// # Returns
    /// - `Ok(Retailer)` - Retailer with related names
    /// - `Err(AppError::NotFound)` - No retailer with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Retailer, AppError> {
        RetailerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a retailer.
    ///
    /// # Returns
    /// - `Ok(Retailer)` - The created retailer
    /// - `Err(AppError::BadRequest)` - Invalid taxonomy references or duplicate phone
    pub async fn create(&self, params: RetailerParams) -> Result<Retailer, AppError> {
        self.check_references(&params).await?;
        self.check_phone(params.phone.as_deref(), None).await?;

        let phone = params.phone.clone();
        let retailer = RetailerRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate_phone(phone.as_deref())))?;

        tracing::info!("Created retailer {}", retailer.id);

        Ok(retailer)
    }

    /// Applies a partial update; the invariants are checked on the merged result.
    ///
    /// # Returns
    /// - `Ok(Retailer)` - The updated retailer
    /// - `Err(AppError::NotFound)` - No retailer with that ID
    /// - `Err(AppError::BadRequest)` - Invalid taxonomy references or duplicate phone
    pub async fn update(&self, id: i32, changes: UpdateRetailerParams) -> Result<Retailer, AppError> {
        let repo = RetailerRepository::new(self.db);

        let current = repo.find_params(id).await?.ok_or_else(|| not_found(id))?;
        let params = changes.merge_into(current);

        self.check_references(&params).await?;
        self.check_phone(params.phone.as_deref(), Some(id)).await?;

        let sales_rep_ids = AssignmentRepository::new(self.db)
            .sales_rep_ids_for_retailer(id)
            .await?;

        let phone = params.phone.clone();
        let retailer = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, duplicate_phone(phone.as_deref())))?
            .ok_or_else(|| not_found(id))?;

        self.cache.invalidate_sales_reps(&sales_rep_ids).await;

        Ok(retailer)
    }

    /// Deletes a retailer and its assignments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let sales_rep_ids = AssignmentRepository::new(self.db)
            .sales_rep_ids_for_retailer(id)
            .await?;

        if !RetailerRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        self.cache.invalidate_sales_reps(&sales_rep_ids).await;

        tracing::info!("Deleted retailer {}", id);

        Ok(())
    }

    async fn check_references(&self, params: &RetailerParams) -> Result<(), AppError> {
        if RegionRepository::new(self.db)
            .find_by_id(params.region_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Region {} does not exist",
                params.region_id
            )));
        }

        let area = AreaRepository::new(self.db)
            .find_by_id(params.area_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Area {} does not exist", params.area_id))
            })?;
        if area.region_id != params.region_id {
            return Err(AppError::BadRequest(format!(
                "Area {} does not belong to region {}",
                params.area_id, params.region_id
            )));
        }

        if DistributorRepository::new(self.db)
            .find_by_id(params.distributor_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Distributor {} does not exist",
                params.distributor_id
            )));
        }

        if let Some(territory_id) = params.territory_id {
            let territory = TerritoryRepository::new(self.db)
                .find_by_id(territory_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Territory {} does not exist", territory_id))
                })?;
            if territory.area_id != params.area_id {
                return Err(AppError::BadRequest(format!(
                    "Territory {} does not belong to area {}",
                    territory_id, params.area_id
                )));
            }
        }

        Ok(())
    }

    async fn check_phone(&self, phone: Option<&str>, exclude_id: Option<i32>) -> Result<(), AppError> {
        if let Some(phone) = phone {
            if RetailerRepository::new(self.db)
                .phone_taken(phone, exclude_id)
                .await?
            {
                return Err(AppError::BadRequest(duplicate_phone(Some(phone))));
            }
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Retailer {} not found", id))
}

fn duplicate_phone(phone: Option<&str>) -> String {
    format!("Phone {} already exists", phone.unwrap_or_default())
}

//! Sales rep listing and self-service over assigned retailers.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::{listing_key, ListingCache},
    data::{
        assignment::AssignmentRepository, retailer::RetailerRepository,
        sales_rep::SalesRepRepository,
    },
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        pagination::Page,
        retailer::{Retailer, RetailerQuery, SalesRepRetailerUpdate},
        sales_rep::SalesRep,
        user::UserFilter,
    },
};

pub struct SalesRepService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> SalesRepService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    /// Gets a page of sales reps with their emails.
    pub async fn get_paginated(&self, filter: UserFilter) -> Result<Page<SalesRep>, AppError> {
        Ok(SalesRepRepository::new(self.db)
            .get_paginated(&filter)
            .await?)
    }

    /// Gets the JSON body of one page of the retailers assigned to a sales rep.
    ///
    /// The body is served from the listing cache when the same normalized query was answered
    /// within the TTL; otherwise the page is loaded, serialized, cached and returned.
    ///
    /// # Arguments
    /// - `sales_rep_id` - Sales rep whose assignments are listed
    /// - `query` - Normalized list query
    ///
    /// # Returns
    /// - `Ok(String)` - Serialized `PaginatedRetailersDto`
    /// - `Err(AppError)` - Database or serialization failure
    pub async fn assigned_retailers_json(
        &self,
        sales_rep_id: i32,
        query: RetailerQuery,
    ) -> Result<String, AppError> {
        let key = listing_key(sales_rep_id, &query)?;

        if let Some(body) = self.cache.get(&key).await {
            tracing::debug!("Listing cache hit for {}", key);
            return Ok(body);
        }
        tracing::debug!("Listing cache miss for {}", key);

        let page = RetailerRepository::new(self.db)
            .get_paginated(&query, Some(sales_rep_id))
            .await?;
        let body = serde_json::to_string(&page.into_dto())
            .map_err(|e| InternalError::Serialize(e.to_string()))?;

        self.cache.insert(key, body.clone()).await;

        Ok(body)
    }

    /// Gets a retailer the sales rep is assigned to.
    ///
    /// # Returns
    /// - `Ok(Retailer)` - The retailer
    /// - `Err(AppError::NotFound)` - No retailer with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Retailer not assigned to the sales rep
    pub async fn get_assigned(
        &self,
        sales_rep: &SalesRep,
        retailer_id: i32,
    ) -> Result<Retailer, AppError> {
        let retailer = RetailerRepository::new(self.db)
            .find_by_id(retailer_id)
            .await?
            .ok_or_else(|| not_found(retailer_id))?;

        self.ensure_assigned(sales_rep, retailer_id).await?;

        Ok(retailer)
    }

    /// Updates points, routes and notes of an assigned retailer.
    ///
    /// Drops the cached pages of every sales rep assigned to the retailer.
    pub async fn update_assigned(
        &self,
        sales_rep: &SalesRep,
        retailer_id: i32,
        changes: SalesRepRetailerUpdate,
    ) -> Result<Retailer, AppError> {
        let repo = RetailerRepository::new(self.db);

        if repo.find_params(retailer_id).await?.is_none() {
            return Err(not_found(retailer_id));
        }

        self.ensure_assigned(sales_rep, retailer_id).await?;

        let retailer = repo
            .update_by_sales_rep(retailer_id, changes)
            .await?
            .ok_or_else(|| not_found(retailer_id))?;

        let sales_rep_ids = AssignmentRepository::new(self.db)
            .sales_rep_ids_for_retailer(retailer_id)
            .await?;
        self.cache.invalidate_sales_reps(&sales_rep_ids).await;

        Ok(retailer)
    }

    async fn ensure_assigned(&self, sales_rep: &SalesRep, retailer_id: i32) -> Result<(), AppError> {
        if !AssignmentRepository::new(self.db)
            .is_assigned(sales_rep.id, retailer_id)
            .await?
        {
            return Err(AuthError::AccessDenied(
                sales_rep.user_id,
                "Retailer is not assigned to you".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Retailer {} not found", id))
}

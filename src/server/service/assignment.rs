//! Bulk assignment of retailers to sales reps.

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ListingCache,
    data::{
        assignment::AssignmentRepository, retailer::RetailerRepository,
        sales_rep::SalesRepRepository,
    },
    error::AppError,
    model::assignment::{AssignOutcome, BulkAction, BulkAssignParams},
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a ListingCache) -> Self {
        Self { db, cache }
    }

    /// Assigns or unassigns a batch of retailers for one sales rep.
    ///
    /// Assign requires every retailer to exist and rejects the whole batch when any retailer
    /// belongs to another sales rep. Unassign only removes rows of this sales rep and ignores
    /// everything else.
    ///
    /// # Arguments
    /// - `params` - Sales rep, distinct retailer IDs and action
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of distinct retailer IDs in the request
    /// - `Err(AppError::NotFound)` - Unknown sales rep, or unknown retailers on assign
    /// - `Err(AppError::AssignmentConflict)` - Retailers already assigned to other sales reps
    pub async fn bulk(&self, params: BulkAssignParams) -> Result<u64, AppError> {
        if SalesRepRepository::new(self.db)
            .find_by_id(params.sales_rep_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Sales rep {} not found",
                params.sales_rep_id
            )));
        }

        let repo = AssignmentRepository::new(self.db);

        match params.action {
            BulkAction::Assign => {
                let missing = RetailerRepository::new(self.db)
                    .find_missing_ids(&params.retailer_ids)
                    .await?;
                if !missing.is_empty() {
                    let ids: Vec<String> = missing.iter().map(i32::to_string).collect();
                    return Err(AppError::NotFound(format!(
                        "Retailers not found: {}",
                        ids.join(", ")
                    )));
                }

                match repo.assign(params.sales_rep_id, &params.retailer_ids).await? {
                    AssignOutcome::Assigned(inserted) => tracing::info!(
                        "Assigned {} retailer(s) to sales rep {} ({} new)",
                        params.retailer_ids.len(),
                        params.sales_rep_id,
                        inserted
                    ),
                    AssignOutcome::Conflicts(conflicts) => {
                        return Err(AppError::AssignmentConflict(conflicts));
                    }
                }
            }
            BulkAction::Unassign => {
                let removed = repo
                    .unassign(params.sales_rep_id, &params.retailer_ids)
                    .await?;
                tracing::info!(
                    "Unassigned {} retailer(s) from sales rep {}",
                    removed,
                    params.sales_rep_id
                );
            }
        }

        self.cache.invalidate_sales_rep(params.sales_rep_id).await;

        Ok(params.retailer_ids.len() as u64)
    }
}

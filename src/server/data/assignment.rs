//! Sales rep ↔ retailer assignment repository.
//!
//! Assignments live in the `sales_rep_retailers` join table. Bulk assignment checks for
//! conflicting assignments and inserts the new rows inside one transaction so two concurrent
//! requests cannot both claim the same retailer.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::assignment::{AssignOutcome, AssignmentConflict};

pub struct AssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns retailers to a sales rep unless any of them belongs to another sales rep.
    ///
    /// Retailers already assigned to `sales_rep_id` are left untouched. If any retailer is
    /// assigned to a different sales rep the transaction is rolled back and the conflicts are
    /// returned ordered by retailer ID.
    ///
    /// # Arguments
    /// - `sales_rep_id` - Target sales rep, expected to exist
    /// - `retailer_ids` - Distinct IDs of existing retailers
    ///
    /// # Returns
    /// - `Ok(AssignOutcome::Assigned(n))` - `n` new assignment rows inserted
    /// - `Ok(AssignOutcome::Conflicts(_))` - Nothing changed
    /// - `Err(DbErr)` - Database error; nothing changed
    pub async fn assign(
        &self,
        sales_rep_id: i32,
        retailer_ids: &[i32],
    ) -> Result<AssignOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::SalesRepRetailer::find()
            .filter(entity::sales_rep_retailer::Column::RetailerId.is_in(retailer_ids.to_vec()))
            .find_also_related(entity::prelude::SalesRep)
            .order_by_asc(entity::sales_rep_retailer::Column::RetailerId)
            .all(&txn)
            .await?;

        let mut already_assigned = HashSet::new();
        let mut foreign = Vec::new();
        for (assignment, sales_rep) in existing {
            if assignment.sales_rep_id == sales_rep_id {
                already_assigned.insert(assignment.retailer_id);
            } else {
                let sales_rep_name = sales_rep.map(|s| s.name).unwrap_or_default();
                foreign.push((assignment.retailer_id, assignment.sales_rep_id, sales_rep_name));
            }
        }

        if !foreign.is_empty() {
            let retailer_names: HashMap<i32, String> = entity::prelude::Retailer::find()
                .filter(
                    entity::retailer::Column::Id
                        .is_in(foreign.iter().map(|(retailer_id, _, _)| *retailer_id)),
                )
                .all(&txn)
                .await?
                .into_iter()
                .map(|r| (r.id, r.name))
                .collect();

            txn.rollback().await?;

            let conflicts = foreign
                .into_iter()
                .map(
                    |(retailer_id, other_sales_rep_id, sales_rep_name)| AssignmentConflict {
                        retailer_id,
                        retailer_name: retailer_names
                            .get(&retailer_id)
                            .cloned()
                            .unwrap_or_default(),
                        sales_rep_id: other_sales_rep_id,
                        sales_rep_name,
                    },
                )
                .collect();

            return Ok(AssignOutcome::Conflicts(conflicts));
        }

        let assigned_at = Utc::now();
        let new_rows: Vec<entity::sales_rep_retailer::ActiveModel> = retailer_ids
            .iter()
            .filter(|id| !already_assigned.contains(id))
            .map(|retailer_id| entity::sales_rep_retailer::ActiveModel {
                sales_rep_id: ActiveValue::Set(sales_rep_id),
                retailer_id: ActiveValue::Set(*retailer_id),
                assigned_at: ActiveValue::Set(assigned_at),
            })
            .collect();
        let inserted = new_rows.len() as u64;

        if !new_rows.is_empty() {
            entity::prelude::SalesRepRetailer::insert_many(new_rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(AssignOutcome::Assigned(inserted))
    }

    /// Removes the assignments between a sales rep and the given retailers.
    ///
    /// Retailers that are not assigned to the sales rep are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of assignment rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unassign(&self, sales_rep_id: i32, retailer_ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::SalesRepRetailer::delete_many()
            .filter(entity::sales_rep_retailer::Column::SalesRepId.eq(sales_rep_id))
            .filter(entity::sales_rep_retailer::Column::RetailerId.is_in(retailer_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// IDs of the sales reps a retailer is assigned to.
    pub async fn sales_rep_ids_for_retailer(&self, retailer_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SalesRepRetailer::find()
            .filter(entity::sales_rep_retailer::Column::RetailerId.eq(retailer_id))
            .select_only()
            .column(entity::sales_rep_retailer::Column::SalesRepId)
            .order_by_asc(entity::sales_rep_retailer::Column::SalesRepId)
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn is_assigned(&self, sales_rep_id: i32, retailer_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::SalesRepRetailer::find()
            .filter(entity::sales_rep_retailer::Column::SalesRepId.eq(sales_rep_id))
            .filter(entity::sales_rep_retailer::Column::RetailerId.eq(retailer_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

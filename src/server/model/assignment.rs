//! Bulk assignment domain models and parameters.

use std::collections::BTreeSet;

use crate::{
    model::assignment::{AssignmentConflictDto, BulkActionDto, BulkAssignDto},
    server::error::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Assign,
    Unassign,
}

impl From<BulkActionDto> for BulkAction {
    fn from(dto: BulkActionDto) -> Self {
        match dto {
            BulkActionDto::Assign => BulkAction::Assign,
            BulkActionDto::Unassign => BulkAction::Unassign,
        }
    }
}

/// Validated bulk assignment request with duplicate retailer IDs collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkAssignParams {
    pub sales_rep_id: i32,
    pub retailer_ids: Vec<i32>,
    pub action: BulkAction,
}

impl BulkAssignParams {
    pub fn from_dto(dto: BulkAssignDto) -> Result<Self, AppError> {
        let retailer_ids: Vec<i32> = dto
            .retailer_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if retailer_ids.is_empty() {
            return Err(AppError::BadRequest(
                "retailerIds must contain at least one id".to_string(),
            ));
        }

        Ok(Self {
            sales_rep_id: dto.sales_rep_id,
            retailer_ids,
            action: dto.action.into(),
        })
    }
}

/// A targeted retailer already assigned to a different sales rep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentConflict {
    pub retailer_id: i32,
    pub retailer_name: String,
    pub sales_rep_id: i32,
    pub sales_rep_name: String,
}

impl AssignmentConflict {
    pub fn into_dto(self) -> AssignmentConflictDto {
        AssignmentConflictDto {
            retailer_id: self.retailer_id,
            retailer_name: self.retailer_name,
            sales_rep_id: self.sales_rep_id,
            sales_rep_name: self.sales_rep_name,
        }
    }
}

/// Result of the transactional assign operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    /// Every retailer is now assigned to the rep; holds the number of new rows.
    Assigned(u64),
    /// Nothing changed because some retailers belong to other reps.
    Conflicts(Vec<AssignmentConflict>),
}

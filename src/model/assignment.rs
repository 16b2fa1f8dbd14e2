use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BulkActionDto {
    Assign,
    Unassign,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignDto {
    pub sales_rep_id: i32,
    pub retailer_ids: Vec<i32>,
    pub action: BulkActionDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkAssignResultDto {
    pub success: bool,
    pub affected: u64,
}

/// A retailer that is already held by a different sales rep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentConflictDto {
    pub retailer_id: i32,
    pub retailer_name: String,
    pub sales_rep_id: i32,
    pub sales_rep_name: String,
}

/// 400 body returned when a bulk assignment is rejected because of conflicts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignmentConflictErrorDto {
    pub error: String,
    pub conflicts: Vec<AssignmentConflictDto>,
}

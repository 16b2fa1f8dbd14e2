use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{double_option, PaginationMetaDto};

/// Compact `{ id, name }` reference to a related record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedRefDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetailerDto {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub points: i32,
    pub routes: String,
    pub notes: String,
    pub region: NamedRefDto,
    pub area: NamedRefDto,
    pub distributor: NamedRefDto,
    pub territory: Option<NamedRefDto>,
    pub sales_reps: Vec<NamedRefDto>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRetailersDto {
    pub data: Vec<RetailerDto>,
    pub meta: PaginationMetaDto,
}

/// Query string accepted by both retailer list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RetailerQueryDto {
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 20)
    pub limit: Option<u64>,
    /// Case-insensitive substring of the name or phone
    pub search: Option<String>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
    pub distributor_id: Option<i32>,
    pub territory_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRetailerDto {
    pub name: String,
    pub phone: Option<String>,
    pub region_id: i32,
    pub area_id: i32,
    pub distributor_id: i32,
    pub territory_id: Option<i32>,
    pub points: Option<i32>,
    pub routes: Option<String>,
    pub notes: Option<String>,
}

/// Partial admin update. `phone` and `territoryId` accept `null` to clear the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRetailerDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
    pub distributor_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub territory_id: Option<Option<i32>>,
    pub points: Option<i32>,
    pub routes: Option<String>,
    pub notes: Option<String>,
}

/// The only fields a sales rep may change on an assigned retailer.
///
/// Any other field in the payload rejects the whole request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SalesRepUpdateRetailerDto {
    pub points: Option<i32>,
    pub routes: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportResultDto {
    pub imported: u64,
    pub skipped: u64,
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::PaginationMetaDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaDto {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
    pub region_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryDto {
    pub id: i32,
    pub name: String,
    pub area_id: i32,
    pub area_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DistributorDto {
    pub id: i32,
    pub name: String,
}

/// Request body for creating or renaming a region.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionPayloadDto {
    pub name: String,
}

/// Request body for creating or updating an area.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaPayloadDto {
    pub name: String,
    pub region_id: i32,
}

/// Request body for creating or updating a territory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryPayloadDto {
    pub name: String,
    pub area_id: i32,
}

/// Request body for creating or renaming a distributor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistributorPayloadDto {
    pub name: String,
}

/// Query string accepted by the taxonomy list endpoints.
///
/// `regionId` only applies to areas and `areaId` only to territories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaxonomyQueryDto {
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 20)
    pub limit: Option<u64>,
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    pub region_id: Option<i32>,
    pub area_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRegionsDto {
    pub data: Vec<RegionDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAreasDto {
    pub data: Vec<AreaDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedTerritoriesDto {
    pub data: Vec<TerritoryDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDistributorsDto {
    pub data: Vec<DistributorDto>,
    pub meta: PaginationMetaDto,
}

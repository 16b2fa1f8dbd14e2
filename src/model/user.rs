use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::PaginationMetaDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RoleDto {
    Admin,
    SalesRep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub role: RoleDto,
    pub is_predefined_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub data: Vec<UserDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: RoleDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<RoleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponseDto {
    pub message: String,
    pub user: UserDto,
}

/// Query string accepted by the user and sales rep list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQueryDto {
    /// Page number starting at 1 (default: 1)
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 20)
    pub limit: Option<u64>,
    /// Case-insensitive substring of the username/name or email
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedSalesRepsDto {
    pub data: Vec<SalesRepDto>,
    pub meta: PaginationMetaDto,
}

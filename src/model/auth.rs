use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::RoleDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The authenticated user as returned by login and `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub role: RoleDto,
    pub is_predefined_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub access_token: String,
    pub user: AuthUserDto,
}

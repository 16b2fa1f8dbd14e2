use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        assignment::{AssignmentConflictErrorDto, BulkAssignDto, BulkAssignResultDto},
    },
    server::{
        controller::ApiJson,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{assignment::BulkAssignParams, user::Role},
        service::assignment::AssignmentService,
        state::AppState,
    },
};

/// Tag for grouping assignment endpoints in OpenAPI documentation
pub static ASSIGNMENT_TAG: &str = "assignments";

/// Assign or unassign a batch of retailers for one sales rep.
///
/// `assign` is all-or-nothing: when any retailer already belongs to another sales rep nothing
/// changes and the conflicts are listed. `unassign` only removes this sales rep's assignments.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection and listing cache
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Sales rep ID, retailer IDs and action
///
/// # Returns
/// - `200 OK` - `{ success: true, affected }` with the number of distinct retailer IDs
/// - `400 Bad Request` - Empty retailer list or conflicting assignments
/// - `404 Not Found` - Unknown sales rep, or unknown retailers on assign
#[utoipa::path(
    post,
    path = "/admin/assignments/bulk",
    tag = ASSIGNMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = BulkAssignDto,
    responses(
        (status = 200, description = "Assignments updated", body = BulkAssignResultDto),
        (status = 400, description = "Retailers already assigned elsewhere", body = AssignmentConflictErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Sales rep or retailers not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_assign(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<BulkAssignDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = BulkAssignParams::from_dto(payload)?;
    let affected = AssignmentService::new(&state.db, &state.cache)
        .bulk(params)
        .await?;

    Ok(Json(BulkAssignResultDto {
        success: true,
        affected,
    }))
}

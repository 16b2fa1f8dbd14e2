use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        retailer::{
            CreateRetailerDto, ImportResultDto, PaginatedRetailersDto, RetailerDto,
            RetailerQueryDto, UpdateRetailerDto,
        },
    },
    server::{
        controller::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            retailer::{RetailerParams, RetailerQuery, UpdateRetailerParams},
            user::Role,
        },
        service::{import::ImportService, retailer::RetailerService},
        state::AppState,
    },
};

/// Tag for grouping admin retailer endpoints in OpenAPI documentation
pub static RETAILER_TAG: &str = "retailers";

/// Multipart field carrying the CSV upload.
const IMPORT_FIELD: &str = "file";

/// Multipart form accepted by the import endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImportFileForm {
    /// CSV with the columns name, region, area and distributor, plus optional phone,
    /// territory, points, routes and notes
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Get a page of retailers.
///
/// Filters combine with AND. The search matches the name or phone, ignoring case.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Page, limit, search and taxonomy filters
///
/// # Returns
/// - `200 OK` - Retailers ordered by name
/// - `400 Bad Request` - Invalid pagination or filter values
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/admin/retailers",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    params(RetailerQueryDto),
    responses(
        (status = 200, description = "Page of retailers", body = PaginatedRetailersDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_retailers(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<RetailerQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let query = RetailerQuery::from_dto(query)?;
    let page = RetailerService::new(&state.db, &state.cache)
        .get_paginated(query)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Get a retailer by ID.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Retailer with its taxonomy names and assigned sales reps
/// - `404 Not Found` - Unknown retailer
#[utoipa::path(
    get,
    path = "/admin/retailers/{id}",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Retailer ID")),
    responses(
        (status = 200, description = "Retailer", body = RetailerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Retailer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let retailer = RetailerService::new(&state.db, &state.cache)
        .get_by_id(id)
        .await?;

    Ok(Json(retailer.into_dto()))
}

/// Create a retailer.
///
/// The area must belong to the region and the territory, when given, to the area.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new retailer
/// - `400 Bad Request` - Invalid fields, unknown or inconsistent taxonomy, or duplicate phone
#[utoipa::path(
    post,
    path = "/admin/retailers",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateRetailerDto,
    responses(
        (status = 201, description = "Retailer created", body = RetailerDto),
        (status = 400, description = "Invalid retailer", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateRetailerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = RetailerParams::from_dto(payload)?;
    let retailer = RetailerService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(retailer.into_dto())))
}

/// Update a retailer.
///
/// Omitted fields keep their value; `phone` and `territoryId` may be set to `null`. The merged
/// record is validated like a new one.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/admin/retailers/{id}",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Retailer ID")),
    request_body = UpdateRetailerDto,
    responses(
        (status = 200, description = "Retailer updated", body = RetailerDto),
        (status = 400, description = "Invalid retailer", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Retailer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateRetailerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let changes = UpdateRetailerParams::from_dto(payload)?;
    let retailer = RetailerService::new(&state.db, &state.cache)
        .update(id, changes)
        .await?;

    Ok(Json(retailer.into_dto()))
}

/// Delete a retailer and its assignments.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/admin/retailers/{id}",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Retailer ID")),
    responses(
        (status = 204, description = "Retailer deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Retailer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    RetailerService::new(&state.db, &state.cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Import retailers from a CSV upload.
///
/// Rows whose region, area, territory or distributor cannot be resolved by name, or whose
/// phone is already taken, are skipped and logged. Valid rows are inserted together.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `multipart` - Form with the CSV in the `file` field
///
/// # Returns
/// - `200 OK` - Number of imported and skipped rows
/// - `400 Bad Request` - No file, empty or oversized file, or missing required columns
#[utoipa::path(
    post,
    path = "/admin/retailers/import",
    tag = RETAILER_TAG,
    security(("bearer_auth" = [])),
    request_body(content = ImportFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Import finished", body = ImportResultDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_retailers(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let mut multipart = multipart?;

    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMPORT_FIELD) {
            file = Some(field.bytes().await?);
            break;
        }
    }

    let Some(bytes) = file else {
        return Err(AppError::BadRequest(format!(
            "Missing '{}' field with the CSV file",
            IMPORT_FIELD
        )));
    };

    let summary = ImportService::new(&state.db).import_csv(&bytes).await?;

    Ok(Json(summary.into_dto()))
}

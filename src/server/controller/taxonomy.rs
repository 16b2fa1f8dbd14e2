use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        taxonomy::{
            AreaDto, AreaPayloadDto, DistributorDto, DistributorPayloadDto, PaginatedAreasDto,
            PaginatedDistributorsDto, PaginatedRegionsDto, PaginatedTerritoriesDto, RegionDto,
            RegionPayloadDto, TaxonomyQueryDto, TerritoryDto, TerritoryPayloadDto,
        },
    },
    server::{
        controller::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            taxonomy::{AreaParams, DistributorParams, RegionParams, TaxonomyFilter, TerritoryParams},
            user::Role,
        },
        service::taxonomy::{
            area::AreaService, distributor::DistributorService, region::RegionService,
            territory::TerritoryService,
        },
        state::AppState,
    },
};

/// Tag for grouping taxonomy endpoints in OpenAPI documentation
pub static TAXONOMY_TAG: &str = "taxonomy";

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    AuthGuard::new(&state.db, &state.keys, headers)
        .require(&[Role::Admin])
        .await?;
    Ok(())
}

/// Get a page of regions.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Page, limit and optional case-insensitive name search
///
/// # Returns
/// - `200 OK` - Regions ordered by name
/// - `400 Bad Request` - Invalid pagination values
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/admin/regions",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(TaxonomyQueryDto),
    responses(
        (status = 200, description = "Page of regions", body = PaginatedRegionsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_regions(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TaxonomyQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let filter = TaxonomyFilter::from_dto(query)?;
    let page = RegionService::new(&state.db, &state.cache)
        .get_paginated(filter)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Create a region.
///
/// Names are unique ignoring case.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new region
/// - `400 Bad Request` - Blank or duplicate name
#[utoipa::path(
    post,
    path = "/admin/regions",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    request_body = RegionPayloadDto,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<RegionPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = RegionParams::from_dto(payload)?;
    let region = RegionService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(region.into_dto())))
}

/// Rename a region.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The renamed region
/// - `400 Bad Request` - Blank or duplicate name
/// - `404 Not Found` - Unknown region
#[utoipa::path(
    patch,
    path = "/admin/regions/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Region ID")),
    request_body = RegionPayloadDto,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<RegionPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = RegionParams::from_dto(payload)?;
    let region = RegionService::new(&state.db, &state.cache)
        .update(id, params)
        .await?;

    Ok(Json(region.into_dto()))
}

/// Delete a region.
///
/// Refused while any area or retailer still references the region.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Region deleted
/// - `400 Bad Request` - Region still in use
/// - `404 Not Found` - Unknown region
#[utoipa::path(
    delete,
    path = "/admin/regions/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Region ID")),
    responses(
        (status = 204, description = "Region deleted"),
        (status = 400, description = "Region still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_region(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    RegionService::new(&state.db, &state.cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a page of areas, optionally restricted to one region.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/admin/areas",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(TaxonomyQueryDto),
    responses(
        (status = 200, description = "Page of areas", body = PaginatedAreasDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_areas(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TaxonomyQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let filter = TaxonomyFilter::from_dto(query)?;
    let page = AreaService::new(&state.db, &state.cache)
        .get_paginated(filter)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Create an area inside a region.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new area
/// - `400 Bad Request` - Blank name, unknown region or name already used in the region
#[utoipa::path(
    post,
    path = "/admin/areas",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    request_body = AreaPayloadDto,
    responses(
        (status = 201, description = "Area created", body = AreaDto),
        (status = 400, description = "Invalid name or unknown region", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_area(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<AreaPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = AreaParams::from_dto(payload)?;
    let area = AreaService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(area.into_dto())))
}

/// Rename an area or move it to another region.
///
/// Moving is refused while retailers reference the area under its current region.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/admin/areas/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Area ID")),
    request_body = AreaPayloadDto,
    responses(
        (status = 200, description = "Area updated", body = AreaDto),
        (status = 400, description = "Invalid name or area still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_area(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AreaPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = AreaParams::from_dto(payload)?;
    let area = AreaService::new(&state.db, &state.cache)
        .update(id, params)
        .await?;

    Ok(Json(area.into_dto()))
}

/// Delete an area that no territory or retailer references.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/admin/areas/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Area ID")),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 400, description = "Area still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_area(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    AreaService::new(&state.db, &state.cache).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a page of territories, optionally restricted to one area.
#[utoipa::path(
    get,
    path = "/admin/territories",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(TaxonomyQueryDto),
    responses(
        (status = 200, description = "Page of territories", body = PaginatedTerritoriesDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_territories(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TaxonomyQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let filter = TaxonomyFilter::from_dto(query)?;
    let page = TerritoryService::new(&state.db, &state.cache)
        .get_paginated(filter)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Create a territory inside an area.
#[utoipa::path(
    post,
    path = "/admin/territories",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    request_body = TerritoryPayloadDto,
    responses(
        (status = 201, description = "Territory created", body = TerritoryDto),
        (status = 400, description = "Invalid name or unknown area", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_territory(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<TerritoryPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = TerritoryParams::from_dto(payload)?;
    let territory = TerritoryService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(territory.into_dto())))
}

/// Rename a territory or move it to another area.
#[utoipa::path(
    patch,
    path = "/admin/territories/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Territory ID")),
    request_body = TerritoryPayloadDto,
    responses(
        (status = 200, description = "Territory updated", body = TerritoryDto),
        (status = 400, description = "Invalid name or territory still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_territory(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<TerritoryPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = TerritoryParams::from_dto(payload)?;
    let territory = TerritoryService::new(&state.db, &state.cache)
        .update(id, params)
        .await?;

    Ok(Json(territory.into_dto()))
}

/// Delete a territory that no retailer references.
#[utoipa::path(
    delete,
    path = "/admin/territories/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Territory ID")),
    responses(
        (status = 204, description = "Territory deleted"),
        (status = 400, description = "Territory still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Territory not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_territory(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    TerritoryService::new(&state.db, &state.cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/distributors",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(TaxonomyQueryDto),
    responses(
        (status = 200, description = "Page of distributors", body = PaginatedDistributorsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_distributors(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TaxonomyQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let filter = TaxonomyFilter::from_dto(query)?;
    let page = DistributorService::new(&state.db, &state.cache)
        .get_paginated(filter)
        .await?;

    Ok(Json(page.into_dto()))
}

#[utoipa::path(
    post,
    path = "/admin/distributors",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    request_body = DistributorPayloadDto,
    responses(
        (status = 201, description = "Distributor created", body = DistributorDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_distributor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<DistributorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = DistributorParams::from_dto(payload)?;
    let distributor = DistributorService::new(&state.db, &state.cache)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(distributor.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/admin/distributors/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Distributor ID")),
    request_body = DistributorPayloadDto,
    responses(
        (status = 200, description = "Distributor updated", body = DistributorDto),
        (status = 400, description = "Invalid or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Distributor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_distributor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<DistributorPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let params = DistributorParams::from_dto(payload)?;
    let distributor = DistributorService::new(&state.db, &state.cache)
        .update(id, params)
        .await?;

    Ok(Json(distributor.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/admin/distributors/{id}",
    tag = TAXONOMY_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Distributor ID")),
    responses(
        (status = 204, description = "Distributor deleted"),
        (status = 400, description = "Distributor still referenced", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Distributor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_distributor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    DistributorService::new(&state.db, &state.cache)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

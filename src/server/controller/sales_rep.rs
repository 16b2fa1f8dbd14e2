use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        retailer::{PaginatedRetailersDto, RetailerDto, RetailerQueryDto, SalesRepUpdateRetailerDto},
        user::{PaginatedSalesRepsDto, UserQueryDto},
    },
    server::{
        controller::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            retailer::{RetailerQuery, SalesRepRetailerUpdate},
            user::{Role, UserFilter},
        },
        service::sales_rep::SalesRepService,
        state::AppState,
    },
};

/// Tag for grouping sales rep endpoints in OpenAPI documentation
pub static SALES_REP_TAG: &str = "sales-reps";

/// Get a page of sales reps.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Sales reps ordered by name, with their login emails
/// - `400 Bad Request` - Invalid pagination values
#[utoipa::path(
    get,
    path = "/admin/sales-reps",
    tag = SALES_REP_TAG,
    security(("bearer_auth" = [])),
    params(UserQueryDto),
    responses(
        (status = 200, description = "Page of sales reps", body = PaginatedSalesRepsDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sales_reps(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<UserQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[Role::Admin])
        .await?;

    let filter = UserFilter::from_dto(query)?;
    let page = SalesRepService::new(&state.db, &state.cache)
        .get_paginated(filter)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Get a page of the retailers assigned to the calling sales rep.
///
/// Accepts the same filters as the admin list. Identical queries are answered from the
/// listing cache until the TTL expires or a write touches one of the rep's retailers.
///
/// # Access Control
/// - `SalesRep` with a sales rep profile
///
/// # Arguments
/// - `state` - Application state containing the database connection and listing cache
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Page, limit, search and taxonomy filters
///
/// # Returns
/// - `200 OK` - Assigned retailers ordered by name
/// - `400 Bad Request` - Invalid pagination or filter values
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not a sales rep
#[utoipa::path(
    get,
    path = "/retailers",
    tag = SALES_REP_TAG,
    security(("bearer_auth" = [])),
    params(RetailerQueryDto),
    responses(
        (status = 200, description = "Page of assigned retailers", body = PaginatedRetailersDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Sales rep role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_assigned_retailers(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<RetailerQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, sales_rep) = AuthGuard::new(&state.db, &state.keys, &headers)
        .require_sales_rep()
        .await?;

    let query = RetailerQuery::from_dto(query)?;
    let body = SalesRepService::new(&state.db, &state.cache)
        .assigned_retailers_json(sales_rep.id, query)
        .await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Get one of the calling sales rep's assigned retailers.
///
/// # Access Control
/// - `SalesRep` assigned to the retailer
///
/// # Returns
/// - `200 OK` - The retailer
/// - `403 Forbidden` - Retailer is not assigned to the caller
/// - `404 Not Found` - Unknown retailer
#[utoipa::path(
    get,
    path = "/retailers/{id}",
    tag = SALES_REP_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Retailer ID")),
    responses(
        (status = 200, description = "Retailer", body = RetailerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Retailer not assigned to caller", body = ErrorDto),
        (status = 404, description = "Retailer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assigned_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (_, sales_rep) = AuthGuard::new(&state.db, &state.keys, &headers)
        .require_sales_rep()
        .await?;

    let retailer = SalesRepService::new(&state.db, &state.cache)
        .get_assigned(&sales_rep, id)
        .await?;

    Ok(Json(retailer.into_dto()))
}

/// Update points, routes or notes of an assigned retailer.
///
/// Any other field in the body is rejected.
///
/// # Access Control
/// - `SalesRep` assigned to the retailer
#[utoipa::path(
    patch,
    path = "/retailers/{id}",
    tag = SALES_REP_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Retailer ID")),
    request_body = SalesRepUpdateRetailerDto,
    responses(
        (status = 200, description = "Retailer updated", body = RetailerDto),
        (status = 400, description = "Invalid or forbidden fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Retailer not assigned to caller", body = ErrorDto),
        (status = 404, description = "Retailer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assigned_retailer(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<SalesRepUpdateRetailerDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, sales_rep) = AuthGuard::new(&state.db, &state.keys, &headers)
        .require_sales_rep()
        .await?;

    let changes = SalesRepRetailerUpdate::from_dto(payload)?;
    let retailer = SalesRepService::new(&state.db, &state.cache)
        .update_assigned(&sales_rep, id, changes)
        .await?;

    Ok(Json(retailer.into_dto()))
}

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            CreateUserDto, CreateUserResponseDto, PaginatedUsersDto, UpdateUserDto, UserDto,
            UserQueryDto,
        },
    },
    server::{
        controller::{ApiJson, ApiPath, ApiQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, Role, UpdateUserParams, User, UserFilter},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

fn user_service(state: &AppState) -> UserService<'_> {
    UserService::new(
        &state.db,
        &state.cache,
        state.superadmin_email.as_deref(),
        state.bcrypt_cost,
    )
}

async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    AuthGuard::new(&state.db, &state.keys, headers)
        .require(&[Role::Admin])
        .await
}

/// Get a page of users.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Page, limit and optional search over username and email
///
/// # Returns
/// - `200 OK` - Users ordered by ID
/// - `400 Bad Request` - Invalid pagination values
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(UserQueryDto),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<UserQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let filter = UserFilter::from_dto(query)?;
    let page = user_service(&state).get_paginated(filter).await?;

    Ok(Json(page.into_dto(state.superadmin_email.as_deref())))
}

/// Get a user by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &headers).await?;

    let user = user_service(&state).get_by_id(id).await?;

    Ok(Json(user.into_dto(state.superadmin_email.as_deref())))
}

/// Create a user.
///
/// A `SalesRep` user gets a sales rep profile named after the username. Only the super-admin
/// may create other admins.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - `{ message, user }`
/// - `400 Bad Request` - Invalid fields or email already in use
/// - `403 Forbidden` - Caller may not create a user with this role
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreateUserResponseDto),
        (status = 400, description = "Invalid user or duplicate email", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to create this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &headers).await?;

    let params = CreateUserParams::from_dto(payload)?;
    let user = user_service(&state).create(&actor, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponseDto {
            message: "User created successfully".to_string(),
            user: user.into_dto(state.superadmin_email.as_deref()),
        }),
    ))
}

/// Update a user.
///
/// Omitted fields keep their value. A new password is hashed before it is stored. Changing
/// the role creates or removes the sales rep profile.
///
/// # Access Control
/// - `Admin`; only the super-admin may change admins, and only itself when the target is the
///   super-admin
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid change or duplicate email", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to change this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &headers).await?;

    let params = UpdateUserParams::from_dto(payload)?;
    let user = user_service(&state).update(&actor, id, params).await?;

    Ok(Json(user.into_dto(state.superadmin_email.as_deref())))
}

/// Delete a user together with its sales rep profile and assignments.
///
/// # Access Control
/// - `Admin`; the super-admin cannot be deleted and nobody can delete themselves
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &headers).await?;

    user_service(&state).delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

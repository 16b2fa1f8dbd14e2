use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthUserDto, LoginDto, LoginResponseDto},
    },
    server::{
        controller::ApiJson,
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials and issues a bearer token to send as
/// `Authorization: Bearer <token>` on every other endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Access token and the authenticated user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (access_token, user) = AuthService::new(&state.db, &state.keys)
        .login(&payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponseDto {
        access_token,
        user: user.into_auth_dto(state.superadmin_email.as_deref()),
    }))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The user the token belongs to
/// - `401 Unauthorized` - Missing, invalid or expired token, or user deleted
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = AuthUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.keys, &headers)
        .require(&[])
        .await?;

    Ok(Json(user.into_auth_dto(state.superadmin_email.as_deref())))
}

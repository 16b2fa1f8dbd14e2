use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature or expiry validation, or its subject is malformed.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but the user it names has since been deleted.
    #[error("User {0} from token no longer exists")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the rights for the operation.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 with "Unauthorized"
/// - `InvalidCredentials` → 401 with "Invalid credentials"
/// - `AccessDenied` → 403 with the denial reason
///
/// Details are logged at debug level while the client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, reason) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}

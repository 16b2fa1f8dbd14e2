use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{sales_rep::SalesRepRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        sales_rep::SalesRep,
        user::{Role, User},
    },
    service::auth::token::TokenKeys,
};

/// Per-request access check for bearer-token authenticated operations.
///
/// The token only identifies the user; the role is read from the database on every request so
/// role changes and deletions take effect immediately.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Authenticates the caller and checks its role.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed to run the operation; an empty list admits any user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired token or malformed subject
    /// - `Err(AuthError::UserNotInDatabase)` - The token's user has been deleted
    /// - `Err(AuthError::AccessDenied)` - The user's role is not in `roles`
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.keys.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            let allowed: Vec<&str> = roles.iter().map(Role::as_str).collect();
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Requires role {}", allowed.join(" or ")),
            )
            .into());
        }

        Ok(user)
    }

    /// Authenticates a sales rep and loads its profile.
    ///
    /// # Returns
    /// - `Ok((User, SalesRep))` - The caller and its sales rep profile
    /// - `Err(AuthError::AccessDenied)` - Caller is not a sales rep or has no profile
    /// - `Err(AuthError)` - Any failure from [`AuthGuard::require`]
    pub async fn require_sales_rep(&self) -> Result<(User, SalesRep), AppError> {
        let user = self.require(&[Role::SalesRep]).await?;

        let Some(sales_rep) = SalesRepRepository::new(self.db)
            .find_by_user_id(user.id)
            .await?
        else {
            return Err(AuthError::AccessDenied(
                user.id,
                "No sales rep profile for this user".to_string(),
            )
            .into());
        };

        Ok((user, sales_rep))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

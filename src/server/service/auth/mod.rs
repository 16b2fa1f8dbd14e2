//! Login, token and password handling.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{password::verify_password, token::TokenKeys},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Checks a user's credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords produce the same error so the response does not
    /// reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Login email, compared case-insensitively
    /// - `password` - Plain-text password
    ///
    /// # Returns
    /// - `Ok((token, user))` - Signed access token and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database, hashing or signing failure
    pub async fn login(&self, email: &str, password: String) -> Result<(String, User), AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.keys.issue(&user)?;

        tracing::info!("User {} logged in", user.id);

        Ok((token, user))
    }
}

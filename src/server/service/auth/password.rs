//! Bcrypt hashing on the blocking thread pool.

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| InternalError::BlockingTask(e.to_string()))??;

    Ok(hash)
}

/// Checks a password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::BcryptErr)` - Stored hash is malformed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| InternalError::BlockingTask(e.to_string()))??;

    Ok(matches)
}

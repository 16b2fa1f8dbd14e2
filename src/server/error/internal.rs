use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user role is neither `Admin` nor `SalesRep`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{0}' stored for user")]
    UnknownRole(String),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(String),

    /// A response body could not be serialized for the listing cache.
    #[error("Failed to serialize response: {0}")]
    Serialize(String),
}

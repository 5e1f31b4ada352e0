use crate::types::DbId;

/// Errors raised by guestbook rules, independent of transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with that id. Entries are hard-deleted, so this also covers
    /// anything removed by a successful delete.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A submission or session id failed validation.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The visitor's session already liked the entry.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A session-scoped action arrived without a session.
    #[error("Session required: {0}")]
    Unauthorized(String),

    /// The delete password did not match.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

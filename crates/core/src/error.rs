use crate::types::DbId;

/// Domain errors shared by every crate. The API layer maps each variant to
/// an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller input broke a domain rule (blank title, short password, ...).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No valid credentials were presented.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not the owner of the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

use crate::types::DbId;

/// Domain-level error type.
///
/// The error surface of this system is deliberately small: a requested
/// record either exists or it does not. Anything else is an internal
/// failure that the HTTP layer reports without detail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

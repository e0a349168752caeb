use crate::types::DbId;

/// Domain error kinds shared by every layer.
///
/// Storage and service code raise these unchanged; the HTTP layer decides
/// how each kind is rendered.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed {entity} JSON: {reason}")]
    Decode { entity: &'static str, reason: String },

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} rows affected for id {id}")]
    NoAffectedRows { entity: &'static str, id: DbId },

    #[error("Cannot attach a car to person {owner_id}: no such person")]
    OwnerNotFound { owner_id: DbId },

    #[error("Update of {entity} carries no fields")]
    NoUpdateFields { entity: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// True for errors caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Internal(_))
    }
}

use autocatalog_core::error::CoreError;
use autocatalog_db::DbError;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::{ErrorEnvelope, ERROR_SENTINEL, STATUS_BAD_REQUEST, STATUS_INTERNAL};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the sentinel error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `autocatalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Database(db) => AppError::Database(db),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Envelope status and client-facing message for this error.
    ///
    /// Server-side failures are logged here and replaced by a generic
    /// message.
    fn classify(&self) -> (u16, String) {
        match self {
            AppError::Core(core) if core.is_client_error() => {
                tracing::debug!(error = %core, "Request rejected");
                (STATUS_BAD_REQUEST, core.to_string())
            }
            AppError::Core(core) => {
                tracing::error!(error = %core, "Internal core error");
                (STATUS_INTERNAL, INTERNAL_MESSAGE.to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (STATUS_INTERNAL, INTERNAL_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (STATUS_BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (STATUS_INTERNAL, INTERNAL_MESSAGE.to_string())
            }
            AppError::Timeout => {
                tracing::warn!("Request timed out");
                (STATUS_INTERNAL, self.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.classify();
        (sentinel_status(), Json(ErrorEnvelope { status, error })).into_response()
    }
}

/// HTTP status carried by every error response. The real outcome lives in
/// the envelope's `status` field.
pub fn sentinel_status() -> StatusCode {
    StatusCode::from_u16(ERROR_SENTINEL).unwrap_or(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_222() {
        assert_eq!(sentinel_status().as_u16(), 222);
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::Core(CoreError::NotFound {
            entity: "Car",
            id: 9,
        });
        assert_eq!(
            err.classify(),
            (STATUS_BAD_REQUEST, "Car with id 9 not found".to_string())
        );
    }

    #[test]
    fn internal_detail_is_hidden() {
        let err = AppError::InternalError("pool exhausted at 10.0.0.3".into());
        let (status, message) = err.classify();
        assert_eq!(status, STATUS_INTERNAL);
        assert_eq!(message, INTERNAL_MESSAGE);

        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.classify().0, STATUS_INTERNAL);
    }

    #[test]
    fn db_errors_unwrap_into_matching_variants() {
        let err: AppError = DbError::Core(CoreError::NoUpdateFields { entity: "Car" }).into();
        assert!(matches!(
            err,
            AppError::Core(CoreError::NoUpdateFields { .. })
        ));

        let err: AppError = DbError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }
}

use autocatalog_core::error::CoreError;

/// Errors raised by the repositories.
///
/// Domain outcomes (not found, nothing affected, missing owner, empty
/// patch) keep their [`CoreError`] kind; driver failures are carried as-is.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

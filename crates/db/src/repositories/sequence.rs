use autocatalog_core::types::DbId;
use sqlx::PgConnection;

/// Value most recently handed out by `sequence` on this connection.
///
/// `currval` is session-local, so concurrent inserts on other connections
/// cannot leak into the result.
pub(crate) async fn current_value(
    conn: &mut PgConnection,
    sequence: &str,
) -> Result<DbId, sqlx::Error> {
    sqlx::query_scalar("SELECT currval($1::regclass)")
        .bind(sequence)
        .fetch_one(conn)
        .await
}

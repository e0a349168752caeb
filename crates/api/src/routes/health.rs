//! Liveness and database reachability, mounted at the root rather than
//! under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::response::Envelope;
use crate::state::AppState;

/// Catalog state reported inside the success envelope.
#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `"ok"`, or `"degraded"` while the database is unreachable.
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; a failed database round trip only degrades the
/// reported state.
async fn catalog_health(State(state): State<AppState>) -> Json<Envelope<CatalogHealth>> {
    let db_healthy = match autocatalog_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog database unreachable");
            false
        }
    };

    Json(Envelope::ok(CatalogHealth {
        service: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}

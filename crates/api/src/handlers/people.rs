//! Handlers for the `/people` resource.
//!
//! Bodies are taken as raw bytes and decoded by the service so malformed
//! JSON is reported through the standard error envelope. Query and body
//! extraction failures go through it as well.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::extract::{ApiQuery, RawBody};
use crate::query::IdParams;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/people/add
pub async fn add(
    State(state): State<AppState>,
    RawBody(body): RawBody,
) -> AppResult<impl IntoResponse> {
    let person = state.people.add(&body).await?;
    tracing::info!(person_id = person.id, "Person added");
    Ok(Json(Envelope::ok(person)))
}

/// GET /api/v1/people/get?id=
pub async fn get(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse_id()?;
    let person = state.people.get(id).await?;
    Ok(Json(Envelope::ok(person)))
}

/// DELETE /api/v1/people/delete?id=
///
/// Cars owned by the person are left in place.
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse_id()?;
    state.people.delete(id).await?;
    tracing::info!(person_id = id, "Person deleted");
    Ok(Json(Envelope::ok("Person deleted successfully")))
}

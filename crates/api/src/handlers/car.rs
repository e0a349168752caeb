//! Handlers for the `/car` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::extract::{ApiQuery, RawBody};
use crate::query::{CarListParams, IdParams};
use crate::response::{Envelope, UpdatedId};
use crate::services::UpdateMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/car/add
pub async fn add(
    State(state): State<AppState>,
    RawBody(body): RawBody,
) -> AppResult<impl IntoResponse> {
    let car = state.cars.add(&body).await?;
    tracing::info!(car_id = car.id, owner_id = car.owner_id, "Car added");
    Ok(Json(Envelope::ok(car)))
}

/// GET /api/v1/car/get?id=
pub async fn get(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse_id()?;
    let car = state.cars.get(id).await?;
    Ok(Json(Envelope::ok(car)))
}

/// DELETE /api/v1/car/delete?id=
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.parse_id()?;
    state.cars.delete(id).await?;
    tracing::info!(car_id = id, "Car deleted");
    Ok(Json(Envelope::ok("Car deleted successfully")))
}

/// PATCH /api/v1/car/update?id=
///
/// Only the fields present in the body are changed.
pub async fn update_partial(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
    RawBody(body): RawBody,
) -> AppResult<impl IntoResponse> {
    update(state, params, body, UpdateMode::Partial).await
}

/// PUT /api/v1/car/update?id=
///
/// The body must describe a complete car.
pub async fn update_full(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IdParams>,
    RawBody(body): RawBody,
) -> AppResult<impl IntoResponse> {
    update(state, params, body, UpdateMode::Full).await
}

/// GET /api/v1/car/get_list?limit=&offset=&mark=&model=&owner_id=&sort_by_year_type=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CarListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter();
    let cars = state.cars.list(&filter).await?;
    Ok(Json(Envelope::ok(cars)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn update(
    state: AppState,
    params: IdParams,
    body: Bytes,
    mode: UpdateMode,
) -> AppResult<Json<Envelope<UpdatedId>>> {
    let id = params.parse_id()?;
    state.cars.update(id, &body, mode).await?;
    tracing::info!(car_id = id, ?mode, "Car updated");
    Ok(Json(Envelope::ok(UpdatedId { id })))
}

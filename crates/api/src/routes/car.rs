use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::car;
use crate::state::AppState;

/// Routes mounted at `/car`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(car::add))
        .route("/get", get(car::get))
        .route("/delete", delete(car::delete))
        .route("/update", patch(car::update_partial).put(car::update_full))
        .route("/get_list", get(car::list))
}

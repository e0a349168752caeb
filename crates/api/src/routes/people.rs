use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(people::add))
        .route("/get", get(people::get))
        .route("/delete", delete(people::delete))
}

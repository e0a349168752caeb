pub mod car;
pub mod health;
pub mod people;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people/add                  create (POST)
/// /people/get?id=              fetch (GET)
/// /people/delete?id=           delete (DELETE)
///
/// /car/add                     create (POST)
/// /car/get?id=                 fetch (GET)
/// /car/delete?id=              delete (DELETE)
/// /car/update?id=              partial (PATCH), full (PUT)
/// /car/get_list                filtered, paged list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", people::router())
        .nest("/car", car::router())
}

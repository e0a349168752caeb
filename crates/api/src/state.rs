use std::sync::Arc;

use autocatalog_core::validation::CarValidator;
use autocatalog_db::repositories::{CarRepo, PersonRepo};
use autocatalog_db::DbPool;

use crate::services::{CarService, PeopleService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly only by the health check).
    pub pool: DbPool,
    pub people: Arc<PeopleService>,
    pub cars: Arc<CarService>,
}

impl AppState {
    /// Wire repositories and services over `pool`.
    pub fn new(pool: DbPool) -> Self {
        let people = PeopleService::new(Arc::new(PersonRepo::new(pool.clone())));
        let cars = CarService::new(Arc::new(CarRepo::new(pool.clone())), CarValidator::new());

        Self {
            pool,
            people: Arc::new(people),
            cars: Arc::new(cars),
        }
    }
}

//! Repository layer.
//!
//! The store traits are the contract the service layer depends on. Each
//! repository implements one of them over a `PgPool` and runs every
//! operation inside its own transaction, which rolls back on drop when an
//! error short-circuits before `commit`.

pub mod car_repo;
pub mod person_repo;
mod sequence;

use async_trait::async_trait;
use autocatalog_core::types::DbId;
use autocatalog_core::validation::{CarPatch, NewCar, NewPerson};

use crate::error::DbResult;
use crate::models::car::{Car, CarListFilter};
use crate::models::person::Person;

pub use car_repo::CarRepo;
pub use person_repo::PersonRepo;

/// Persistence contract for people.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert a person and return it with its generated id and timestamp.
    async fn add(&self, person: &NewPerson) -> DbResult<Person>;

    /// Fetch a person; `NotFound` if absent.
    async fn get(&self, id: DbId) -> DbResult<Person>;

    /// Hard-delete a person; `NoAffectedRows` if nothing was removed.
    async fn delete(&self, id: DbId) -> DbResult<()>;
}

/// Persistence contract for cars.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Insert a car owned by an existing person; `OwnerNotFound` otherwise.
    async fn add(&self, car: &NewCar) -> DbResult<Car>;

    /// Fetch a car; `NotFound` if absent.
    async fn get(&self, id: DbId) -> DbResult<Car>;

    /// Hard-delete a car; `NoAffectedRows` if nothing was removed.
    async fn delete(&self, id: DbId) -> DbResult<()>;

    /// Apply the fields present in `patch`.
    ///
    /// `NoUpdateFields` for an empty patch, `NoAffectedRows` when no row
    /// has the id.
    async fn update(&self, id: DbId, patch: &CarPatch) -> DbResult<()>;

    /// List cars matching `filter`.
    async fn list(&self, filter: &CarListFilter) -> DbResult<Vec<Car>>;
}

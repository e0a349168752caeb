use std::sync::Arc;

use autocatalog_core::error::CoreError;
use autocatalog_core::sanitize::Sanitize;
use autocatalog_core::types::DbId;
use autocatalog_core::validation::{CarPatch, CarValidator};
use autocatalog_db::models::car::{Car, CarListFilter};
use autocatalog_db::repositories::CarStore;

use crate::error::AppResult;

/// How an update payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// PATCH: only the fields present are validated and written.
    Partial,
    /// PUT: the payload must be a complete, valid car.
    Full,
}

pub struct CarService {
    store: Arc<dyn CarStore>,
    validator: CarValidator,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>, validator: CarValidator) -> Self {
        Self { store, validator }
    }

    /// Validate a raw JSON payload and store the car.
    pub async fn add(&self, payload: &[u8]) -> AppResult<Car> {
        let car = self.validator.validate_new(payload)?;
        let mut created = self.store.add(&car).await?;
        created.sanitize();
        Ok(created)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Car> {
        let mut car = self.store.get(id).await?;
        car.sanitize();
        Ok(car)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }

    /// Validate `payload` according to `mode` and apply it to car `id`.
    pub async fn update(&self, id: DbId, payload: &[u8], mode: UpdateMode) -> AppResult<()> {
        let patch = match mode {
            UpdateMode::Partial => self.validator.validate_patch(payload)?,
            UpdateMode::Full => CarPatch::from(self.validator.validate_new(payload)?),
        };
        if patch.is_empty() {
            return Err(CoreError::NoUpdateFields { entity: "Car" }.into());
        }

        self.store.update(id, &patch).await?;
        Ok(())
    }

    pub async fn list(&self, filter: &CarListFilter) -> AppResult<Vec<Car>> {
        let mut cars = self.store.list(filter).await?;
        cars.iter_mut().for_each(Sanitize::sanitize);
        Ok(cars)
    }
}

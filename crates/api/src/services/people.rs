use std::sync::Arc;

use autocatalog_core::sanitize::Sanitize;
use autocatalog_core::types::DbId;
use autocatalog_core::validation::validate_new_person;
use autocatalog_db::models::person::Person;
use autocatalog_db::repositories::PersonStore;

use crate::error::AppResult;

pub struct PeopleService {
    store: Arc<dyn PersonStore>,
}

impl PeopleService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Validate a raw JSON payload and store the person.
    pub async fn add(&self, payload: &[u8]) -> AppResult<Person> {
        let person = validate_new_person(payload)?;
        let mut created = self.store.add(&person).await?;
        created.sanitize();
        Ok(created)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Person> {
        let mut person = self.store.get(id).await?;
        person.sanitize();
        Ok(person)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }
}

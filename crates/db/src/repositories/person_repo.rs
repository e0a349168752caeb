//! Repository for the `people` table.

use async_trait::async_trait;
use autocatalog_core::error::CoreError;
use autocatalog_core::types::{DbId, Timestamp};
use autocatalog_core::validation::NewPerson;
use sqlx::PgPool;

use super::sequence::current_value;
use super::PersonStore;
use crate::error::DbResult;
use crate::models::person::Person;

const COLUMNS: &str = "id, name, surname, patronymic, created_at";

const SEQUENCE: &str = "public.people_id_seq";

const ENTITY: &str = "Person";

/// Postgres-backed [`PersonStore`].
#[derive(Debug, Clone)]
pub struct PersonRepo {
    pool: PgPool,
}

impl PersonRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PersonRepo {
    async fn add(&self, person: &NewPerson) -> DbResult<Person> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"INSERT INTO public."people" (name, surname, patronymic) VALUES ($1, $2, $3)"#,
        )
        .bind(&person.name)
        .bind(&person.surname)
        .bind(&person.patronymic)
        .execute(&mut *tx)
        .await?;

        let id = current_value(&mut *tx, SEQUENCE).await?;

        let created_at: Timestamp =
            sqlx::query_scalar(r#"SELECT created_at FROM public."people" WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tx.commit().await?;

        tracing::debug!(person_id = id, "Person inserted");

        Ok(Person {
            id,
            name: person.name.clone(),
            surname: person.surname.clone(),
            patronymic: person.patronymic.clone(),
            created_at,
        })
    }

    async fn get(&self, id: DbId) -> DbResult<Person> {
        let mut tx = self.pool.begin().await?;

        let query = format!(r#"SELECT {COLUMNS} FROM public."people" WHERE id = $1"#);
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tx.commit().await?;
        Ok(person)
    }

    async fn delete(&self, id: DbId) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(r#"DELETE FROM public."people" WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NoAffectedRows { entity: ENTITY, id }.into());
        }

        tx.commit().await?;
        Ok(())
    }
}

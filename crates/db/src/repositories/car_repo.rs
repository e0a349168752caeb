//! Repository for the `car` table.

use async_trait::async_trait;
use autocatalog_core::error::CoreError;
use autocatalog_core::types::{DbId, Timestamp};
use autocatalog_core::validation::{CarPatch, NewCar};
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use super::sequence::current_value;
use super::CarStore;
use crate::error::DbResult;
use crate::models::car::{Car, CarListFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, reg_num, mark, model, year, created_at";

const SEQUENCE: &str = "public.car_id_seq";

const ENTITY: &str = "Car";

/// Postgres-backed [`CarStore`].
#[derive(Debug, Clone)]
pub struct CarRepo {
    pool: PgPool,
}

impl CarRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fail with `OwnerNotFound` unless a person with `owner_id` exists.
    async fn ensure_owner_exists(conn: &mut PgConnection, owner_id: DbId) -> DbResult<()> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM public."people" WHERE id = $1)"#)
                .bind(owner_id)
                .fetch_one(conn)
                .await?;

        if exists {
            Ok(())
        } else {
            tracing::debug!(owner_id, "Rejected car for unknown owner");
            Err(CoreError::OwnerNotFound { owner_id }.into())
        }
    }
}

#[async_trait]
impl CarStore for CarRepo {
    async fn add(&self, car: &NewCar) -> DbResult<Car> {
        let mut tx = self.pool.begin().await?;

        Self::ensure_owner_exists(&mut *tx, car.owner_id).await?;

        sqlx::query(
            r#"INSERT INTO public."car" (owner_id, reg_num, mark, model, year) VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(car.owner_id)
        .bind(&car.reg_num)
        .bind(&car.mark)
        .bind(&car.model)
        .bind(car.year)
        .execute(&mut *tx)
        .await?;

        let id = current_value(&mut *tx, SEQUENCE).await?;

        let created_at: Timestamp =
            sqlx::query_scalar(r#"SELECT created_at FROM public."car" WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tx.commit().await?;

        tracing::debug!(car_id = id, owner_id = car.owner_id, "Car inserted");

        Ok(Car {
            id,
            owner_id: car.owner_id,
            reg_num: car.reg_num.clone(),
            mark: car.mark.clone(),
            model: car.model.clone(),
            year: car.year,
            created_at,
        })
    }

    async fn get(&self, id: DbId) -> DbResult<Car> {
        let mut tx = self.pool.begin().await?;

        let query = format!(r#"SELECT {COLUMNS} FROM public."car" WHERE id = $1"#);
        let car = sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tx.commit().await?;
        Ok(car)
    }

    async fn delete(&self, id: DbId) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(r#"DELETE FROM public."car" WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NoAffectedRows { entity: ENTITY, id }.into());
        }

        tx.commit().await?;
        Ok(())
    }

    async fn update(&self, id: DbId, patch: &CarPatch) -> DbResult<()> {
        if patch.is_empty() {
            return Err(CoreError::NoUpdateFields { entity: ENTITY }.into());
        }

        let mut tx = self.pool.begin().await?;

        if let Some(owner_id) = patch.owner_id {
            Self::ensure_owner_exists(&mut *tx, owner_id).await?;
        }

        let mut builder = build_update(id, patch);
        let result = builder.build().execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NoAffectedRows { entity: ENTITY, id }.into());
        }

        tx.commit().await?;
        Ok(())
    }

    async fn list(&self, filter: &CarListFilter) -> DbResult<Vec<Car>> {
        let mut tx = self.pool.begin().await?;

        let mut builder = build_list(filter);
        let cars = builder
            .build_query_as::<Car>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(cars)
    }
}

/// `UPDATE ... SET` over only the columns present in `patch`.
///
/// The caller guarantees the patch is non-empty.
fn build_update(id: DbId, patch: &CarPatch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(r#"UPDATE public."car" SET "#);

    {
        let mut set = builder.separated(", ");
        if let Some(owner_id) = patch.owner_id {
            set.push("owner_id = ");
            set.push_bind_unseparated(owner_id);
        }
        if let Some(reg_num) = &patch.reg_num {
            set.push("reg_num = ");
            set.push_bind_unseparated(reg_num.clone());
        }
        if let Some(mark) = &patch.mark {
            set.push("mark = ");
            set.push_bind_unseparated(mark.clone());
        }
        if let Some(model) = &patch.model {
            set.push("model = ");
            set.push_bind_unseparated(model.clone());
        }
        if let Some(year) = patch.year {
            set.push("year = ");
            set.push_bind_unseparated(year);
        }
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder
}

/// Filtered, ordered and paginated `SELECT` over cars. Every filter value
/// is a bound parameter.
fn build_list(filter: &CarListFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(r#"SELECT {COLUMNS} FROM public."car" WHERE TRUE"#));

    if let Some(mark) = &filter.mark {
        builder.push(" AND mark = ");
        builder.push_bind(mark.clone());
    }
    if let Some(model) = &filter.model {
        builder.push(" AND model = ");
        builder.push_bind(model.clone());
    }
    if let Some(owner_id) = filter.owner_id {
        builder.push(" AND owner_id = ");
        builder.push_bind(owner_id);
    }

    builder.push(" ORDER BY year ");
    builder.push(filter.order.as_sql());
    builder.push(" ");
    builder.push(filter.order.nulls_sql());
    builder.push(", id ");
    builder.push(filter.order.as_sql());

    builder.push(" LIMIT ");
    builder.push_bind(filter.limit);
    builder.push(" OFFSET ");
    builder.push_bind(filter.offset);
    builder
}

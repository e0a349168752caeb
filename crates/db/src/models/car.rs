//! Car entity model and list filter.

use autocatalog_core::sanitize::{sanitize_text, Sanitize};
use autocatalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `car` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub owner_id: DbId,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: Option<i32>,
    pub created_at: Timestamp,
}

impl Sanitize for Car {
    fn sanitize(&mut self) {
        self.reg_num = sanitize_text(&self.reg_num);
        self.mark = sanitize_text(&self.mark);
        self.model = sanitize_text(&self.model);
    }
}

/// Ordering of car lists by manufacture year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YearOrder {
    /// Newest first (`sort_by_year_type=0`).
    #[default]
    Desc,
    /// Oldest first (`sort_by_year_type=1`).
    Asc,
}

impl YearOrder {
    /// Map the wire flag to an ordering. Only `1` means ascending.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            YearOrder::Asc
        } else {
            YearOrder::Desc
        }
    }

    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            YearOrder::Desc => "DESC",
            YearOrder::Asc => "ASC",
        }
    }

    /// Cars without a year rank as the oldest, so each direction is the
    /// exact reverse of the other.
    pub(crate) fn nulls_sql(self) -> &'static str {
        match self {
            YearOrder::Desc => "NULLS LAST",
            YearOrder::Asc => "NULLS FIRST",
        }
    }
}

/// Filters and pagination for listing cars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarListFilter {
    pub limit: i64,
    pub offset: i64,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub owner_id: Option<DbId>,
    pub order: YearOrder,
}

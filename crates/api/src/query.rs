//! Query-string parameters shared by handlers.
//!
//! Every field arrives as an optional raw string and is parsed here, either
//! strictly (ids) or with defaults (list paging), so a malformed list
//! parameter falls back instead of failing the request.

use autocatalog_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use autocatalog_core::types::DbId;
use autocatalog_db::models::car::{CarListFilter, YearOrder};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `?id=` on get, delete and update routes.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    /// The requested id; `BadRequest` when missing or not an integer.
    pub fn parse_id(&self) -> AppResult<DbId> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing id query parameter".into()))?;

        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid id query parameter: '{raw}'")))
    }
}

/// Query parameters of `GET /car/get_list`.
#[derive(Debug, Default, Deserialize)]
pub struct CarListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub owner_id: Option<String>,
    pub sort_by_year_type: Option<String>,
}

impl CarListParams {
    /// Convert into a repository filter.
    ///
    /// Unparseable numbers fall back to their defaults; blank strings and an
    /// `owner_id` of zero mean "no filter".
    pub fn into_filter(self) -> CarListFilter {
        CarListFilter {
            limit: clamp_limit(parse_num(&self.limit), DEFAULT_LIMIT, MAX_LIMIT),
            offset: clamp_offset(parse_num(&self.offset)),
            mark: non_blank(self.mark),
            model: non_blank(self.model),
            owner_id: parse_num(&self.owner_id).filter(|id| *id != 0),
            order: YearOrder::from_flag(parse_num(&self.sort_by_year_type).unwrap_or(0)),
        }
    }
}

fn parse_num(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

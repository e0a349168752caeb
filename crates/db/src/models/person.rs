//! Person entity model.

use autocatalog_core::sanitize::{sanitize_opt, sanitize_text, Sanitize};
use autocatalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `people` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub created_at: Timestamp,
}

impl Sanitize for Person {
    fn sanitize(&mut self) {
        self.name = sanitize_text(&self.name);
        self.surname = sanitize_text(&self.surname);
        sanitize_opt(&mut self.patronymic);
    }
}

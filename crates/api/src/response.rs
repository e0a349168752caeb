//! Shared response envelope types for API handlers.
//!
//! Successful responses are HTTP 200 with `{ "status": 200, "body": ... }`.
//! Failures are HTTP 222 with `{ "status": 400 | 500, "error": "..." }`;
//! see [`crate::error::AppError`].

use autocatalog_core::types::DbId;
use serde::Serialize;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL: u16 = 500;

/// HTTP status code used for every error response.
pub const ERROR_SENTINEL: u16 = 222;

/// Standard `{ "status": 200, "body": T }` success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(car)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }
}

/// `{ "status": 400 | 500, "error": "..." }` failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: u16,
    pub error: String,
}

/// Body of a successful car update.
#[derive(Debug, Serialize)]
pub struct UpdatedId {
    pub id: DbId,
}

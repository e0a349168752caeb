//! Domain building blocks for the auto catalog service.
//!
//! Pure logic only: error kinds, payload validation, output sanitization
//! and pagination helpers. Nothing in this crate touches the database or
//! the HTTP stack.

pub mod error;
pub mod pagination;
pub mod sanitize;
pub mod types;
pub mod validation;

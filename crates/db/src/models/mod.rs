//! Row models.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching the table
//! row. Create and update inputs are the validated drafts from
//! `autocatalog_core::validation`.

pub mod car;
pub mod person;

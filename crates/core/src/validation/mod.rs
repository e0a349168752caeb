//! Payload validation.
//!
//! Incoming JSON is decoded into a permissive payload shape (every field
//! optional), trimmed, checked with `validator` rules plus the explicit
//! format checks owned by the entity validators, and only then converted
//! into the strongly typed draft the storage layer accepts.

pub mod car;
pub mod person;

use serde::de::DeserializeOwned;
use validator::ValidationErrors;

use crate::error::CoreError;

pub use car::{CarPatch, CarValidator, NewCar};
pub use person::{validate_new_person, NewPerson};

/// Error code `validator` reports for an absent `required` field.
pub const CODE_REQUIRED: &str = "required";

/// Decode a JSON body into a payload shape.
pub(crate) fn decode<T: DeserializeOwned>(entity: &'static str, payload: &[u8]) -> Result<T, CoreError> {
    serde_json::from_slice(payload).map_err(|e| CoreError::Decode {
        entity,
        reason: e.to_string(),
    })
}

/// Trim an optional string in place; blank values become `None`.
pub(crate) fn trim_field(value: &mut Option<String>) {
    if let Some(raw) = value.take() {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            *value = Some(trimmed.to_string());
        }
    }
}

/// Pick the first violation (by field name) that `keep` accepts and turn
/// it into a [`CoreError::Validation`].
pub(crate) fn first_violation(
    errors: &ValidationErrors,
    keep: impl Fn(&str) -> bool,
) -> Option<CoreError> {
    let mut fields: Vec<(String, String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.clone(), err.code.to_string(), message)
            })
        })
        .filter(|(_, code, _)| keep(code))
        .collect();

    fields.sort();
    fields
        .into_iter()
        .next()
        .map(|(field, _, message)| CoreError::Validation { field, message })
}

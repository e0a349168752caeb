//! Validation of person payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{decode, first_violation, trim_field};
use crate::error::CoreError;

/// Raw person payload as submitted by a client.
#[derive(Debug, Default, Deserialize, Validate)]
struct PersonPayload {
    #[validate(required(message = "name is required"))]
    name: Option<String>,
    #[validate(required(message = "surname is required"))]
    surname: Option<String>,
    patronymic: Option<String>,
}

impl PersonPayload {
    fn trim(&mut self) {
        trim_field(&mut self.name);
        trim_field(&mut self.surname);
        trim_field(&mut self.patronymic);
    }
}

/// A validated person ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}

/// Decode, trim and validate a person creation payload.
pub fn validate_new_person(payload: &[u8]) -> Result<NewPerson, CoreError> {
    let mut person: PersonPayload = decode("person", payload)?;
    person.trim();

    if let Err(errors) = person.validate() {
        if let Some(err) = first_violation(&errors, |_| true) {
            return Err(err);
        }
    }

    match (person.name, person.surname) {
        (Some(name), Some(surname)) => Ok(NewPerson {
            name,
            surname,
            patronymic: person.patronymic,
        }),
        _ => Err(CoreError::Internal(
            "person payload passed validation without name or surname".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_full_payload_and_trims() {
        let person = validate_new_person(
            br#"{"name": "  Ivan ", "surname": "Petrov", "patronymic": " Sergeevich "}"#,
        )
        .unwrap();
        assert_eq!(person.name, "Ivan");
        assert_eq!(person.surname, "Petrov");
        assert_eq!(person.patronymic.as_deref(), Some("Sergeevich"));
    }

    #[test]
    fn patronymic_is_optional() {
        let person = validate_new_person(br#"{"name": "Anna", "surname": "Smith"}"#).unwrap();
        assert!(person.patronymic.is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_new_person(br#"{"name": "   ", "surname": "Smith"}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation { ref field, .. } if field == "name");
    }

    #[test]
    fn missing_surname_is_rejected() {
        let err = validate_new_person(br#"{"name": "Anna"}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation { ref field, .. } if field == "surname");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = validate_new_person(b"{not json").unwrap_err();
        assert_matches!(err, CoreError::Decode { entity: "person", .. });
    }
}

//! Validation of car payloads, for creation as well as full and partial
//! updates.

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::{decode, first_violation, trim_field, CODE_REQUIRED};
use crate::error::CoreError;
use crate::types::DbId;

/// Earliest accepted year is the one after this.
pub const MIN_CAR_YEAR: i32 = 1885;

/// One letter, three digits, two letters, three digits. Letters may be
/// Latin or Cyrillic.
pub const REG_NUM_PATTERN: &str = r"^[A-Za-zА-Яа-я][0-9]{3}[A-Za-zА-Яа-я]{2}[0-9]{3}$";

const CODE_REG_NUM: &str = "reg_num";

/// Raw car payload as submitted by a client.
#[derive(Debug, Default, Deserialize, Validate)]
struct CarPayload {
    #[validate(
        required(message = "owner_id is required"),
        range(min = 1, message = "owner_id must be a positive id")
    )]
    owner_id: Option<DbId>,
    #[validate(required(message = "reg_num is required"))]
    reg_num: Option<String>,
    #[validate(required(message = "mark is required"))]
    mark: Option<String>,
    #[validate(required(message = "model is required"))]
    model: Option<String>,
    #[validate(range(exclusive_min = MIN_CAR_YEAR, message = "year must be after 1885"))]
    year: Option<i32>,
}

impl CarPayload {
    fn trim(&mut self) {
        trim_field(&mut self.reg_num);
        trim_field(&mut self.mark);
        trim_field(&mut self.model);
    }
}

/// A validated car ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCar {
    pub owner_id: DbId,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: Option<i32>,
}

/// Sparse set of car fields to change. `None` leaves the column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarPatch {
    pub owner_id: Option<DbId>,
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

impl CarPatch {
    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none()
            && self.reg_num.is_none()
            && self.mark.is_none()
            && self.model.is_none()
            && self.year.is_none()
    }
}

impl From<NewCar> for CarPatch {
    fn from(car: NewCar) -> Self {
        Self {
            owner_id: Some(car.owner_id),
            reg_num: Some(car.reg_num),
            mark: Some(car.mark),
            model: Some(car.model),
            year: car.year,
        }
    }
}

/// Car validator. Owns the compiled registration number pattern; build it
/// once at startup and share it.
#[derive(Debug, Clone)]
pub struct CarValidator {
    reg_num: Regex,
}

impl Default for CarValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CarValidator {
    pub fn new() -> Self {
        Self {
            reg_num: Regex::new(REG_NUM_PATTERN).expect("valid regex"),
        }
    }

    /// Whether `reg_num` is a well-formed registration number.
    pub fn is_valid_reg_num(&self, reg_num: &str) -> bool {
        self.reg_num.is_match(reg_num)
    }

    /// Decode and fully validate a car payload.
    pub fn validate_new(&self, payload: &[u8]) -> Result<NewCar, CoreError> {
        let (car, result) = self.check(payload)?;
        if let Err(errors) = result {
            if let Some(err) = first_violation(&errors, |_| true) {
                return Err(err);
            }
        }

        match (car.owner_id, car.reg_num, car.mark, car.model) {
            (Some(owner_id), Some(reg_num), Some(mark), Some(model)) => Ok(NewCar {
                owner_id,
                reg_num,
                mark,
                model,
                year: car.year,
            }),
            _ => Err(CoreError::Internal(
                "car payload passed validation with a required field missing".into(),
            )),
        }
    }

    /// Decode and validate a partial car payload.
    ///
    /// Absent fields are left out of the patch; present fields must still
    /// be well formed.
    pub fn validate_patch(&self, payload: &[u8]) -> Result<CarPatch, CoreError> {
        let (car, result) = self.check(payload)?;
        if let Err(errors) = result {
            if let Some(err) = first_violation(&errors, |code| code != CODE_REQUIRED) {
                return Err(err);
            }
        }

        Ok(CarPatch {
            owner_id: car.owner_id,
            reg_num: car.reg_num,
            mark: car.mark,
            model: car.model,
            year: car.year,
        })
    }

    fn check(
        &self,
        payload: &[u8],
    ) -> Result<(CarPayload, Result<(), ValidationErrors>), CoreError> {
        let mut car: CarPayload = decode("car", payload)?;
        car.trim();

        let mut errors = match car.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Some(reg_num) = car.reg_num.as_deref() {
            if !self.is_valid_reg_num(reg_num) {
                let mut err = ValidationError::new(CODE_REG_NUM);
                err.message = Some(Cow::Owned(format!(
                    "reg_num '{reg_num}' must look like A123BC456"
                )));
                errors.add("reg_num", err);
            }
        }

        let result = if errors.is_empty() { Ok(()) } else { Err(errors) };
        Ok((car, result))
    }
}

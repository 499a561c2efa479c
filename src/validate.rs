//! Input validators for raw terminal fields.
//!
//! Each validator checks the whole string against a fixed shape. None of them
//! sanitize anything: values reach the database only as bound parameters.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{AppointmentStatus, Gender};

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").unwrap());
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").unwrap());
static TIME_SLOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-2][0-9]:[0-5][0-9]-[0-2][0-9]:[0-5][0-9]$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ERROR: Please enter number for the id")]
    Id { value: String },

    #[error("ERROR: Please enter M for Male, F for female, Other for other.")]
    Gender { value: String },

    #[error("ERROR: Please enter valid date format for MM/DD/YEAR, all is number only.")]
    Date { value: String },

    #[error("ERROR: Please enter valid time slot format for 00:00-00:00, all is number only.")]
    TimeSlot { value: String },

    #[error("ERROR: Please enter corrected status, AV for available, AC for active, WL for waitlist, PA for past.")]
    Status { value: String },

    #[error("ERROR: '{value}' is not a valid number for the {field}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Digits only. The empty string passes.
pub fn validate_id(raw: &str) -> Result<(), ValidationError> {
    if ID_PATTERN.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::Id { value: raw.to_string() })
    }
}

pub fn validate_gender(raw: &str) -> Result<Gender, ValidationError> {
    Gender::from_code(raw).ok_or_else(|| ValidationError::Gender { value: raw.to_string() })
}

/// `M/D/YYYY` shape with one or two digit month and day. Calendar validity
/// is left to the database.
pub fn validate_date(raw: &str) -> Result<(), ValidationError> {
    if DATE_PATTERN.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::Date { value: raw.to_string() })
    }
}

/// `HH:MM-HH:MM` shape. Start and end are not compared.
pub fn validate_time_slot(raw: &str) -> Result<(), ValidationError> {
    if TIME_SLOT_PATTERN.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::TimeSlot { value: raw.to_string() })
    }
}

pub fn validate_status(raw: &str) -> Result<AppointmentStatus, ValidationError> {
    AppointmentStatus::from_code(raw).ok_or_else(|| ValidationError::Status { value: raw.to_string() })
}

/// Convert a field to the `i32` bound for integer columns.
pub fn parse_int(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    raw.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: raw.to_string(),
    })
}

/// Validate as an id, then convert for binding.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    validate_id(raw)?;
    parse_int(field, raw)
}

//! Field validation for raw user-entered text.
//!
//! Each field is checked independently and in a fixed order, so the caller
//! always reports the first failing field and nothing else.

use crate::errors::{AppError, AppResult};
use crate::models::record::{NewRecord, RawFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Decimal number (sign, decimal point and exponent accepted).
    Decimal,
    /// Base-10 integer.
    Integer,
    /// Non-empty free text.
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Decimal(f64),
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    NotDecimal,
    NotInteger,
    Empty,
}

/// Validate one raw field against the expected kind.
///
/// Surrounding whitespace is trimmed before parsing. No side effects; the
/// caller decides what to do with the outcome.
pub fn validate(raw: &str, kind: FieldKind) -> Result<FieldValue, FieldError> {
    let trimmed = raw.trim();

    match kind {
        FieldKind::Decimal => trimmed
            .parse::<f64>()
            .map(FieldValue::Decimal)
            .map_err(|_| FieldError::NotDecimal),
        FieldKind::Integer => trimmed
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| FieldError::NotInteger),
        FieldKind::Text => {
            if trimmed.is_empty() {
                Err(FieldError::Empty)
            } else {
                Ok(FieldValue::Text(trimmed.to_string()))
            }
        }
    }
}

fn decimal_field(raw: &str, label: &str) -> AppResult<f64> {
    match validate(raw, FieldKind::Decimal) {
        Ok(FieldValue::Decimal(v)) => Ok(v),
        _ => Err(AppError::Validation(format!("{label} must be a number"))),
    }
}

fn integer_field(raw: &str, label: &str) -> AppResult<i64> {
    match validate(raw, FieldKind::Integer) {
        Ok(FieldValue::Integer(v)) => Ok(v),
        _ => Err(AppError::Validation(format!(
            "{label} must be a whole number"
        ))),
    }
}

fn text_field(raw: &str, label: &str) -> AppResult<String> {
    match validate(raw, FieldKind::Text) {
        Ok(FieldValue::Text(v)) => Ok(v),
        _ => Err(AppError::Validation(format!("{label} must not be empty"))),
    }
}

/// Validate the six raw fields in form order.
///
/// The order is fixed (temperature, humidity, water level, lamp count,
/// extinguisher count, inspector): with several invalid fields, the message
/// always names the first one.
pub fn validate_record(raw: &RawFields) -> AppResult<NewRecord> {
    let temperature = decimal_field(&raw.temperature, "Temperature")?;
    let humidity = decimal_field(&raw.humidity, "Humidity")?;
    let water_level = text_field(&raw.water_level, "Water level")?;
    let lamp_count = integer_field(&raw.lamp_count, "Lamp count")?;
    let extinguisher_count = integer_field(&raw.extinguisher_count, "Extinguisher count")?;
    let inspector = text_field(&raw.inspector, "Inspector")?;

    Ok(NewRecord {
        temperature,
        humidity,
        water_level,
        lamp_count,
        extinguisher_count,
        inspector,
    })
}

//! Request parsing for the Compensation Engine API.
//!
//! Records arrive as loosely-typed JSON objects or CSV rows. This module
//! checks that every required field is present and coerces each value into
//! a [`CompensationInput`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::calculation::CalculationError;
use crate::models::CompensationInput;

use super::response::ApiErrorResponse;

/// Field name of the role level.
pub const ROLE_LEVEL: &str = "role_level";
/// Field name of the team revenue.
pub const TEAM_REVENUE: &str = "team_revenue";
/// Field name of last year's salary.
pub const LAST_YEARS_SALARY: &str = "last_years_salary";
/// Field name of the performance multiplier.
pub const PERFORMANCE_MULTIPLIER: &str = "performance_multiplier";

/// Required input fields, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 4] = [
    ROLE_LEVEL,
    TEAM_REVENUE,
    LAST_YEARS_SALARY,
    PERFORMANCE_MULTIPLIER,
];

/// Parses one JSON record into a calculation input.
///
/// The record must be an object carrying every field in [`REQUIRED_FIELDS`].
/// Numbers may be JSON numbers or numeric strings; the role level may be
/// any scalar and is converted to its string form.
pub fn parse_json_record(record: &Value) -> Result<CompensationInput, ApiErrorResponse> {
    let object = record
        .as_object()
        .ok_or_else(|| ApiErrorResponse::bad_request("Request must be a JSON object"))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(ApiErrorResponse::missing_fields(&missing));
    }

    let role_level = role_text(&object[ROLE_LEVEL]);

    Ok(CompensationInput {
        role_level,
        team_revenue: json_decimal(TEAM_REVENUE, &object[TEAM_REVENUE])?,
        last_years_salary: json_decimal(LAST_YEARS_SALARY, &object[LAST_YEARS_SALARY])?,
        performance_multiplier: json_decimal(
            PERFORMANCE_MULTIPLIER,
            &object[PERFORMANCE_MULTIPLIER],
        )?,
    })
}

/// Coerces a textual field into a non-negative decimal.
///
/// Text that is not a number fails with `InvalidNumericInput`. A finite
/// number outside the decimal range fails with `Internal`, like any other
/// arithmetic overflow.
pub fn text_decimal(field: &str, raw: &str) -> Result<Decimal, CalculationError> {
    numeric_decimal(field, raw.trim())
}

fn json_decimal(field: &str, value: &Value) -> Result<Decimal, CalculationError> {
    match value {
        Value::Number(n) => numeric_decimal(field, &n.to_string()),
        Value::String(s) => text_decimal(field, s),
        _ => Err(not_a_number(field)),
    }
}

fn numeric_decimal(field: &str, raw: &str) -> Result<Decimal, CalculationError> {
    let parsed = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw));
    match parsed {
        Ok(value) => non_negative(field, value),
        Err(_) => match raw.parse::<f64>() {
            Ok(value) if outside_decimal_range(value) && value < 0.0 => Err(negative(field)),
            Ok(value) if outside_decimal_range(value) => Err(CalculationError::Internal),
            _ => Err(not_a_number(field)),
        },
    }
}

/// True for a finite non-zero number too large or too small for `Decimal`.
fn outside_decimal_range(value: f64) -> bool {
    let magnitude = value.abs();
    value.is_finite() && magnitude != 0.0 && !(1e-28..1e28).contains(&magnitude)
}

/// Stringifies a role scalar; booleans and null render as `True`, `False`
/// and `None`.
fn role_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(negative(field));
    }
    Ok(value)
}

fn negative(field: &str) -> CalculationError {
    CalculationError::InvalidNumericInput {
        field: field.to_string(),
        message: "must be non-negative".to_string(),
    }
}

fn not_a_number(field: &str) -> CalculationError {
    CalculationError::InvalidNumericInput {
        field: field.to_string(),
        message: "must be a number".to_string(),
    }
}

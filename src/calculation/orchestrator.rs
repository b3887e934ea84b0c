//! Total compensation orchestration.
//!
//! This module sequences the base salary, performance bonus and LTI stages
//! and converts any stage failure into a caller-facing [`CalculationError`].

use thiserror::Error;

use crate::config::RuleTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationInput, CompensationResult, RoleLevel};

use super::base_salary::compute_base_salary;
use super::lti::compute_lti_and_cash;
use super::performance_bonus::compute_performance_bonus;

/// The caller-facing failure of a compensation calculation.
///
/// Only `InvalidRoleLevel` and `InvalidNumericInput` describe problems with
/// the caller's input; `Internal` never carries internal details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// The role level does not match any configured role.
    #[error("Invalid role level: {0}")]
    InvalidRoleLevel(String),

    /// A numeric field was negative or not a number.
    #[error("Invalid input type or value: {field} {message}")]
    InvalidNumericInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// Any other failure during calculation.
    #[error("An unexpected error occurred during calculation.")]
    Internal,
}

impl CalculationError {
    /// Returns true if the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CalculationError::Internal)
    }
}

impl From<EngineError> for CalculationError {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::UnknownRoleLevel { value } => CalculationError::InvalidRoleLevel(value),
            EngineError::InvalidNumericInput { field, message } => {
                CalculationError::InvalidNumericInput { field, message }
            }
            EngineError::ArithmeticOverflow { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => CalculationError::Internal,
        }
    }
}

/// Calculates total compensation for one employee.
///
/// Runs the base salary, performance bonus and LTI stages in order, each
/// consuming the rounded outputs of the one before. The first failing stage
/// ends the calculation. This function performs no I/O and returns identical
/// output for identical input.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::{calculate_total_compensation, CalculationError};
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let tables = RuleTables::standard();
/// let input = CompensationInput {
///     role_level: "Executive".to_string(),
///     team_revenue: Decimal::new(20_000_000, 0),
///     last_years_salary: Decimal::new(250_000, 0),
///     performance_multiplier: Decimal::new(12, 1),
/// };
///
/// let result = calculate_total_compensation(&tables, &input).unwrap();
/// assert_eq!(result.immediate_cash_bonus, Decimal::new(172_500, 0));
///
/// let bad = CompensationInput { role_level: "Manager".to_string(), ..input };
/// let err = calculate_total_compensation(&tables, &bad).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid role level: Manager");
/// ```
pub fn calculate_total_compensation(
    tables: &RuleTables,
    input: &CompensationInput,
) -> Result<CompensationResult, CalculationError> {
    run_pipeline(tables, input).map_err(CalculationError::from)
}

fn run_pipeline(tables: &RuleTables, input: &CompensationInput) -> EngineResult<CompensationResult> {
    let role_level: RoleLevel = input.role_level.parse()?;

    let calculated_base_salary = compute_base_salary(
        tables,
        role_level,
        input.team_revenue,
        input.last_years_salary,
    )?;

    let bonus = compute_performance_bonus(
        tables,
        calculated_base_salary,
        role_level,
        input.performance_multiplier,
    )?;

    let lti = compute_lti_and_cash(
        tables,
        bonus.performance_bonus,
        bonus.target_bonus_amount,
        role_level,
    )?;

    Ok(CompensationResult {
        calculated_base_salary,
        target_bonus_amount: bonus.target_bonus_amount,
        performance_bonus: bonus.performance_bonus,
        lti_breakdown: lti.breakdown(),
        immediate_cash_bonus: lti.immediate_cash_bonus,
    })
}

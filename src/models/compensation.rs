//! Compensation input and result models.
//!
//! This module contains the transient value objects that flow into and out
//! of the calculation pipeline. Monetary values are serialized as JSON
//! numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs for a single compensation calculation.
///
/// The role level is kept as the raw string received from the caller so
/// that an unrecognized value can be reported back verbatim.
///
/// # Example
///
/// ```
/// use compensation_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     role_level: "Executive".to_string(),
///     team_revenue: Decimal::new(20_000_000, 0),
///     last_years_salary: Decimal::new(250_000, 0),
///     performance_multiplier: Decimal::new(12, 1),
/// };
/// assert_eq!(input.performance_multiplier.to_string(), "1.2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// The role level wire name (e.g., "Mid-level").
    pub role_level: String,
    /// The revenue generated by the employee's team.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub team_revenue: Decimal,
    /// The employee's salary for the previous year.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub last_years_salary: Decimal,
    /// The multiplier applied to the target bonus.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub performance_multiplier: Decimal,
}

/// The long-term incentive portion of the performance bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtiBreakdown {
    /// Portion of the performance bonus paid out later as cash.
    #[serde(with = "rust_decimal::serde::float")]
    pub deferred_cash: Decimal,
    /// Value of the equity award, linked to the target bonus.
    #[serde(with = "rust_decimal::serde::float")]
    pub equity_award_value: Decimal,
    /// Portion of the performance bonus invested in a fund.
    #[serde(with = "rust_decimal::serde::float")]
    pub fund_investment_amount: Decimal,
}

/// The complete result of a compensation calculation.
///
/// Every amount is rounded to two decimal places by the stage that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// The capped, revenue-linked base salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_base_salary: Decimal,
    /// The role-scaled bonus before the performance multiplier.
    #[serde(with = "rust_decimal::serde::float")]
    pub target_bonus_amount: Decimal,
    /// The target bonus scaled by the performance multiplier.
    #[serde(with = "rust_decimal::serde::float")]
    pub performance_bonus: Decimal,
    /// The deferred, equity and fund components.
    pub lti_breakdown: LtiBreakdown,
    /// What remains of the performance bonus after deferral and fund investment.
    #[serde(with = "rust_decimal::serde::float")]
    pub immediate_cash_bonus: Decimal,
}

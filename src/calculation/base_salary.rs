//! Base salary calculation functionality.
//!
//! This module computes the revenue-linked base salary, held within the
//! year-over-year cap band around last year's salary.

use rust_decimal::Decimal;

use crate::config::RuleTables;
use crate::error::EngineResult;
use crate::models::RoleLevel;

use super::rounding::{checked_add, checked_mul, ensure_non_negative, round_money};

/// Computes the capped base salary for a role.
///
/// The potential salary is `fixed_floor + team_revenue * revenue_factor`.
/// It is clamped into `[last_years_salary * lower_bound, last_years_salary * upper_bound]`
/// and rounded to two decimal places. A previous salary of zero collapses
/// both caps, so the result is zero.
///
/// # Errors
///
/// - `InvalidNumericInput` if `team_revenue` or `last_years_salary` is negative
/// - `UnknownRoleLevel` if the tables have no entry for `role_level`
/// - `ArithmeticOverflow` on out-of-range inputs
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::compute_base_salary;
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::RoleLevel;
/// use rust_decimal::Decimal;
///
/// let tables = RuleTables::standard();
/// let salary = compute_base_salary(
///     &tables,
///     RoleLevel::MidLevel,
///     Decimal::new(10_000_000, 0),
///     Decimal::new(80_000, 0),
/// )
/// .unwrap();
/// assert_eq!(salary, Decimal::new(9_200_000, 2));
/// ```
pub fn compute_base_salary(
    tables: &RuleTables,
    role_level: RoleLevel,
    team_revenue: Decimal,
    last_years_salary: Decimal,
) -> EngineResult<Decimal> {
    ensure_non_negative("team_revenue", team_revenue)?;
    ensure_non_negative("last_years_salary", last_years_salary)?;

    let params = tables.parameters(role_level)?;

    let revenue_component = checked_mul(team_revenue, params.revenue_factor, "revenue component")?;
    let potential = checked_add(params.fixed_floor, revenue_component, "potential salary")?;

    let lower_cap = checked_mul(
        last_years_salary,
        tables.salary_cap_lower_bound(),
        "lower salary cap",
    )?;
    let upper_cap = checked_mul(
        last_years_salary,
        tables.salary_cap_upper_bound(),
        "upper salary cap",
    )?;

    let capped = potential.min(upper_cap).max(lower_cap);
    Ok(round_money(capped))
}

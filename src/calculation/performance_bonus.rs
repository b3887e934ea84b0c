//! Performance bonus calculation functionality.
//!
//! This module derives the target bonus from the base salary and scales it
//! by the performance multiplier.

use rust_decimal::Decimal;

use crate::config::RuleTables;
use crate::error::EngineResult;
use crate::models::RoleLevel;

use super::rounding::{checked_mul, ensure_non_negative, round_money};

/// The target and actual bonus for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceBonus {
    /// `base_salary * target_bonus_percent`, rounded to cents.
    pub target_bonus_amount: Decimal,
    /// `target_bonus_amount * performance_multiplier`, rounded to cents.
    pub performance_bonus: Decimal,
}

/// Computes the target bonus and the performance-scaled bonus.
///
/// The target bonus is rounded to cents first, and that rounded amount is
/// what the performance multiplier is applied to.
///
/// # Errors
///
/// - `InvalidNumericInput` if `base_salary` or `performance_multiplier` is negative
/// - `UnknownRoleLevel` if the tables have no entry for `role_level`
/// - `ArithmeticOverflow` on out-of-range inputs
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::compute_performance_bonus;
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::RoleLevel;
/// use rust_decimal::Decimal;
///
/// let bonus = compute_performance_bonus(
///     &RuleTables::standard(),
///     Decimal::new(100_000, 0),
///     RoleLevel::Senior,
///     Decimal::new(11, 1),
/// )
/// .unwrap();
/// assert_eq!(bonus.target_bonus_amount, Decimal::new(100_000, 0));
/// assert_eq!(bonus.performance_bonus, Decimal::new(110_000, 0));
/// ```
pub fn compute_performance_bonus(
    tables: &RuleTables,
    base_salary: Decimal,
    role_level: RoleLevel,
    performance_multiplier: Decimal,
) -> EngineResult<PerformanceBonus> {
    ensure_non_negative("base_salary", base_salary)?;
    ensure_non_negative("performance_multiplier", performance_multiplier)?;

    let params = tables.parameters(role_level)?;

    let target_bonus_amount = round_money(checked_mul(
        base_salary,
        params.target_bonus_percent,
        "target bonus",
    )?);
    let performance_bonus = round_money(checked_mul(
        target_bonus_amount,
        performance_multiplier,
        "performance bonus",
    )?);

    Ok(PerformanceBonus {
        target_bonus_amount,
        performance_bonus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SalaryCapBounds;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bonus(base: &str, role: RoleLevel, multiplier: &str) -> EngineResult<PerformanceBonus> {
        compute_performance_bonus(&RuleTables::standard(), dec(base), role, dec(multiplier))
    }

    #[test]
    fn test_senior_full_target() {
        let result = bonus("100000", RoleLevel::Senior, "1.1").unwrap();
        assert_eq!(result.target_bonus_amount, dec("100000.00"));
        assert_eq!(result.performance_bonus, dec("110000.00"));
    }

    #[test]
    fn test_zero_multiplier_gives_zero_bonus() {
        let result = bonus("80000", RoleLevel::MidLevel, "0.0").unwrap();
        assert_eq!(result.target_bonus_amount, dec("48000.00"));
        assert_eq!(result.performance_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_executive_target_exceeds_base() {
        let result = bonus("287500", RoleLevel::Executive, "1.2").unwrap();
        assert_eq!(result.target_bonus_amount, dec("359375.00"));
        assert_eq!(result.performance_bonus, dec("431250.00"));
    }

    #[test]
    fn test_multiplier_applies_to_rounded_target() {
        // 12345.65 * 0.30 is exactly 3703.695, a true midpoint in decimal
        // arithmetic, so it rounds to the even cent 3703.70; 3703.70 * 2 = 7407.40
        let result = bonus("12345.65", RoleLevel::Junior, "2").unwrap();
        assert_eq!(result.target_bonus_amount, dec("3703.70"));
        assert_eq!(result.performance_bonus, dec("7407.40"));
    }

    #[test]
    fn test_target_is_rounded_to_cents() {
        // 12345.67 * 0.30 = 3703.701
        let result = bonus("12345.67", RoleLevel::Junior, "1").unwrap();
        assert_eq!(result.target_bonus_amount, dec("3703.70"));
        assert_eq!(result.target_bonus_amount.scale(), 2);
    }

    #[test]
    fn test_negative_multiplier_is_rejected() {
        assert_eq!(
            bonus("50000", RoleLevel::Senior, "-0.5"),
            Err(EngineError::negative("performance_multiplier"))
        );
    }

    #[test]
    fn test_negative_base_is_rejected() {
        assert_eq!(
            bonus("-50000", RoleLevel::Senior, "1"),
            Err(EngineError::negative("base_salary"))
        );
    }

    #[test]
    fn test_role_missing_from_tables_is_unknown() {
        let mut roles = RuleTables::standard().roles().clone();
        roles.remove(&RoleLevel::Senior);
        let tables = RuleTables::new(SalaryCapBounds::default(), roles);

        let result = compute_performance_bonus(&tables, dec("100000"), RoleLevel::Senior, dec("1"));
        assert_eq!(
            result,
            Err(EngineError::UnknownRoleLevel {
                value: "Senior".to_string()
            })
        );
    }
}

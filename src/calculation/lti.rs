//! Long-term incentive calculation functionality.
//!
//! This module splits the performance bonus into deferred cash, fund
//! investment and immediate cash, and values the equity award.

use rust_decimal::Decimal;

use crate::config::RuleTables;
use crate::error::EngineResult;
use crate::models::{LtiBreakdown, RoleLevel};

use super::rounding::{checked_mul, checked_sub, ensure_non_negative, round_money};

/// The LTI components and the immediate cash bonus, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LtiAndCash {
    /// `performance_bonus * deferral_percent`.
    pub deferred_cash: Decimal,
    /// `target_bonus_amount * equity_factor` for eligible roles, zero otherwise.
    pub equity_award_value: Decimal,
    /// `performance_bonus * fund_investment_percent`.
    pub fund_investment_amount: Decimal,
    /// The performance bonus left after deferral and fund investment.
    pub immediate_cash_bonus: Decimal,
}

impl LtiAndCash {
    /// Returns the long-term portion as the result breakdown.
    pub fn breakdown(&self) -> LtiBreakdown {
        LtiBreakdown {
            deferred_cash: self.deferred_cash,
            equity_award_value: self.equity_award_value,
            fund_investment_amount: self.fund_investment_amount,
        }
    }
}

/// Splits a performance bonus into its LTI components and immediate cash.
///
/// Equity is valued from the target bonus, not the performance bonus.
/// Immediate cash is computed from the unrounded deferral and fund amounts
/// and is not clamped: a table whose deferral and fund percentages sum
/// above 1 yields a negative immediate cash bonus.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::compute_lti_and_cash;
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::RoleLevel;
/// use rust_decimal::Decimal;
///
/// let lti = compute_lti_and_cash(
///     &RuleTables::standard(),
///     Decimal::new(20_000, 0),
///     Decimal::new(15_000, 0),
///     RoleLevel::Junior,
/// )
/// .unwrap();
/// assert_eq!(lti.deferred_cash, Decimal::new(2_000, 0));
/// assert_eq!(lti.equity_award_value, Decimal::ZERO);
/// assert_eq!(lti.immediate_cash_bonus, Decimal::new(17_000, 0));
/// ```
pub fn compute_lti_and_cash(
    tables: &RuleTables,
    performance_bonus: Decimal,
    target_bonus_amount: Decimal,
    role_level: RoleLevel,
) -> EngineResult<LtiAndCash> {
    ensure_non_negative("performance_bonus", performance_bonus)?;
    ensure_non_negative("target_bonus_amount", target_bonus_amount)?;

    let params = tables.parameters(role_level)?;

    let deferred_cash = checked_mul(performance_bonus, params.deferral_percent, "deferred cash")?;
    let fund_investment_amount = checked_mul(
        performance_bonus,
        params.fund_investment_percent,
        "fund investment",
    )?;

    let equity_award_value = if params.equity_eligible {
        checked_mul(target_bonus_amount, params.equity_factor, "equity award")?
    } else {
        Decimal::ZERO
    };

    let immediate_cash_bonus = checked_sub(
        checked_sub(performance_bonus, deferred_cash, "immediate cash")?,
        fund_investment_amount,
        "immediate cash",
    )?;

    Ok(LtiAndCash {
        deferred_cash: round_money(deferred_cash),
        equity_award_value: round_money(equity_award_value),
        fund_investment_amount: round_money(fund_investment_amount),
        immediate_cash_bonus: round_money(immediate_cash_bonus),
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

    fn lti(perf: &str, target: &str, role: RoleLevel) -> EngineResult<LtiAndCash> {
        compute_lti_and_cash(&RuleTables::standard(), dec(perf), dec(target), role)
    }

    #[test]
    fn test_executive_split() {
        let result = lti("431250.00", "359375.00", RoleLevel::Executive).unwrap();
        assert_eq!(result.deferred_cash, dec("172500.00"));
        assert_eq!(result.fund_investment_amount, dec("86250.00"));
        assert_eq!(result.equity_award_value, dec("179687.50"));
        assert_eq!(result.immediate_cash_bonus, dec("172500.00"));
    }

    #[test]
    fn test_junior_gets_no_equity() {
        let result = lti("20000.00", "15000.00", RoleLevel::Junior).unwrap();
        assert_eq!(result.deferred_cash, dec("2000.00"));
        assert_eq!(result.fund_investment_amount, dec("1000.00"));
        assert_eq!(result.equity_award_value, Decimal::ZERO);
        assert_eq!(result.immediate_cash_bonus, dec("17000.00"));
    }

    #[test]
    fn test_equity_follows_target_not_performance() {
        // Same target, very different performance bonuses.
        let low = lti("1000.00", "50000.00", RoleLevel::Senior).unwrap();
        let high = lti("90000.00", "50000.00", RoleLevel::Senior).unwrap();
        assert_eq!(low.equity_award_value, dec("20000.00"));
        assert_eq!(high.equity_award_value, dec("20000.00"));
    }

    #[test]
    fn test_components_are_rounded_independently() {
        // 300.003, 150.0015, 550.0055
        let result = lti("1000.01", "1000.00", RoleLevel::Senior).unwrap();
        assert_eq!(result.deferred_cash, dec("300.00"));
        assert_eq!(result.fund_investment_amount, dec("150.00"));
        assert_eq!(result.immediate_cash_bonus, dec("550.01"));
    }

    #[test]
    fn test_zero_bonus_gives_zero_cash_components() {
        let result = lti("0", "48000.00", RoleLevel::MidLevel).unwrap();
        assert_eq!(result.deferred_cash, Decimal::ZERO);
        assert_eq!(result.fund_investment_amount, Decimal::ZERO);
        assert_eq!(result.immediate_cash_bonus, Decimal::ZERO);
        assert_eq!(result.equity_award_value, dec("12000.00"));
    }

    #[test]
    fn test_oversubscribed_table_passes_negative_cash_through() {
        let mut roles = RuleTables::standard().roles().clone();
        if let Some(params) = roles.get_mut(&RoleLevel::Senior) {
            params.deferral_percent = dec("0.80");
            params.fund_investment_percent = dec("0.40");
        }
        let tables = RuleTables::new(SalaryCapBounds::default(), roles);

        let result =
            compute_lti_and_cash(&tables, dec("1000"), dec("1000"), RoleLevel::Senior).unwrap();
        assert_eq!(result.immediate_cash_bonus, dec("-200.00"));
    }

    #[test]
    fn test_breakdown_excludes_immediate_cash() {
        let result = lti("431250.00", "359375.00", RoleLevel::Executive).unwrap();
        let breakdown = result.breakdown();
        assert_eq!(breakdown.deferred_cash, result.deferred_cash);
        assert_eq!(breakdown.equity_award_value, result.equity_award_value);
        assert_eq!(breakdown.fund_investment_amount, result.fund_investment_amount);
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        assert_eq!(
            lti("-1", "1000", RoleLevel::Senior),
            Err(EngineError::negative("performance_bonus"))
        );
    }

    #[test]
    fn test_role_missing_from_tables_is_unknown() {
        let mut roles = RuleTables::standard().roles().clone();
        roles.remove(&RoleLevel::Executive);
        let tables = RuleTables::new(SalaryCapBounds::default(), roles);

        let result = compute_lti_and_cash(
            &tables,
            dec("431250.00"),
            dec("359375.00"),
            RoleLevel::Executive,
        );
        assert_eq!(
            result,
            Err(EngineError::UnknownRoleLevel {
                value: "Executive".to_string()
            })
        );
    }
}

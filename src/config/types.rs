//! Rule table types for compensation calculation.
//!
//! This module contains the strongly-typed rule structures, either built
//! in through [`RuleTables::standard`] or deserialized from a YAML rules file.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::RoleLevel;

/// The parameters applied to every employee of one role level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RoleParameters {
    /// Minimum salary component independent of revenue.
    pub fixed_floor: Decimal,
    /// Fraction of team revenue added to the floor.
    pub revenue_factor: Decimal,
    /// Target bonus as a fraction of base salary.
    pub target_bonus_percent: Decimal,
    /// Fraction of the performance bonus deferred as cash.
    pub deferral_percent: Decimal,
    /// Fraction of the performance bonus routed to a fund.
    pub fund_investment_percent: Decimal,
    /// Whether equity awards apply to this role.
    pub equity_eligible: bool,
    /// Fraction of the target bonus converted to equity value.
    #[serde(default)]
    pub equity_factor: Decimal,
}

/// The year-over-year band a base salary must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SalaryCapBounds {
    /// Multiplier on last year's salary giving the minimum base salary.
    pub lower_bound: Decimal,
    /// Multiplier on last year's salary giving the maximum base salary.
    pub upper_bound: Decimal,
}

impl Default for SalaryCapBounds {
    fn default() -> Self {
        Self {
            lower_bound: Decimal::new(85, 2),
            upper_bound: Decimal::new(115, 2),
        }
    }
}

/// The complete, immutable set of compensation rules.
///
/// Once constructed a `RuleTables` value is never mutated; it is shared by
/// reference between calculations and threads.
///
/// # Example
///
/// ```
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::RoleLevel;
/// use rust_decimal::Decimal;
///
/// let tables = RuleTables::standard();
/// let senior = tables.parameters(RoleLevel::Senior).unwrap();
/// assert_eq!(senior.fixed_floor, Decimal::new(100_000, 0));
/// assert_eq!(tables.salary_cap_upper_bound(), Decimal::new(115, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleTables {
    /// Year-over-year salary band.
    #[serde(default)]
    salary_cap: SalaryCapBounds,
    /// Parameters keyed by role level.
    roles: BTreeMap<RoleLevel, RoleParameters>,
}

impl RuleTables {
    /// Creates rule tables from their component parts.
    pub fn new(salary_cap: SalaryCapBounds, roles: BTreeMap<RoleLevel, RoleParameters>) -> Self {
        Self { salary_cap, roles }
    }

    /// Returns the standard compensation rules.
    pub fn standard() -> Self {
        let roles = BTreeMap::from([
            (
                RoleLevel::Junior,
                RoleParameters {
                    fixed_floor: Decimal::new(50_000, 0),
                    revenue_factor: Decimal::new(5, 3),
                    target_bonus_percent: Decimal::new(30, 2),
                    deferral_percent: Decimal::new(10, 2),
                    fund_investment_percent: Decimal::new(5, 2),
                    equity_eligible: false,
                    equity_factor: Decimal::ZERO,
                },
            ),
            (
                RoleLevel::MidLevel,
                RoleParameters {
                    fixed_floor: Decimal::new(75_000, 0),
                    revenue_factor: Decimal::new(10, 3),
                    target_bonus_percent: Decimal::new(60, 2),
                    deferral_percent: Decimal::new(20, 2),
                    fund_investment_percent: Decimal::new(10, 2),
                    equity_eligible: true,
                    equity_factor: Decimal::new(25, 2),
                },
            ),
            (
                RoleLevel::Senior,
                RoleParameters {
                    fixed_floor: Decimal::new(100_000, 0),
                    revenue_factor: Decimal::new(15, 3),
                    target_bonus_percent: Decimal::new(100, 2),
                    deferral_percent: Decimal::new(30, 2),
                    fund_investment_percent: Decimal::new(15, 2),
                    equity_eligible: true,
                    equity_factor: Decimal::new(40, 2),
                },
            ),
            (
                RoleLevel::Executive,
                RoleParameters {
                    fixed_floor: Decimal::new(150_000, 0),
                    revenue_factor: Decimal::new(20, 3),
                    target_bonus_percent: Decimal::new(125, 2),
                    deferral_percent: Decimal::new(40, 2),
                    fund_investment_percent: Decimal::new(20, 2),
                    equity_eligible: true,
                    equity_factor: Decimal::new(50, 2),
                },
            ),
        ]);

        Self::new(SalaryCapBounds::default(), roles)
    }

    /// Returns the parameters for a role level.
    ///
    /// Fails with `UnknownRoleLevel` if the tables carry no entry for the role.
    pub fn parameters(&self, role_level: RoleLevel) -> EngineResult<&RoleParameters> {
        self.roles
            .get(&role_level)
            .ok_or_else(|| EngineError::UnknownRoleLevel {
                value: role_level.to_string(),
            })
    }

    /// Returns all configured role parameters.
    pub fn roles(&self) -> &BTreeMap<RoleLevel, RoleParameters> {
        &self.roles
    }

    /// Returns the salary cap bounds.
    pub fn salary_cap(&self) -> &SalaryCapBounds {
        &self.salary_cap
    }

    /// Multiplier giving the minimum base salary (0.85 by default).
    pub fn salary_cap_lower_bound(&self) -> Decimal {
        self.salary_cap.lower_bound
    }

    /// Multiplier giving the maximum base salary (1.15 by default).
    pub fn salary_cap_upper_bound(&self) -> Decimal {
        self.salary_cap.upper_bound
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::standard()
    }
}
